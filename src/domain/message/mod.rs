pub mod commands;
pub mod entity;

use std::collections::BTreeMap;

use serde::Serialize;

pub use self::entity::Message;

pub const BLANK: &str = "can't be blank";

/// Field-level validation failures, serialized as `{"field": ["reason", ..]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
	pub fn add(
		&mut self,
		field: &str,
		reason: impl Into<String>,
	) {
		self.0.entry(field.to_string()).or_default().push(reason.into());
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(
		&self,
		field: &str,
	) -> Option<&[String]> {
		self.0.get(field).map(Vec::as_slice)
	}
}

impl std::fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut first = true;
		for (field, reasons) in &self.0 {
			for reason in reasons {
				if !first {
					write!(f, ", ")?;
				}
				write!(f, "{field} {reason}")?;
				first = false;
			}
		}
		Ok(())
	}
}

/// Content that passed validation and may be persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMessage {
	content: String,
}

impl NewMessage {
	pub fn content(&self) -> &str {
		&self.content
	}
	pub fn into_content(self) -> String {
		self.content
	}
}

impl TryFrom<String> for NewMessage {
	type Error = ValidationErrors;
	fn try_from(content: String) -> Result<Self, Self::Error> {
		let mut errors = ValidationErrors::default();
		if content.trim().is_empty() {
			errors.add("content", BLANK);
		}
		if !errors.is_empty() {
			return Err(errors);
		}
		Ok(Self { content })
	}
}
