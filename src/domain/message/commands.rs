use serde::{Deserialize, Serialize};

/// Body of `POST /messages`. The raw text is only ever handed to the
/// transform service; it is never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessage {
	pub message: String,
}

/// Outbound payload for the transform service.
#[derive(Debug, Serialize)]
pub struct TransformRequest<'a> {
	pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TransformResponse {
	pub processed_message: String,
}
