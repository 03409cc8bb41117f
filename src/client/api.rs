use serde_json::json;
use thiserror::Error;

use crate::domain::message::Message;

/// Gateway address baked into the client.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ClientError {
	#[error("failed to communicate with the server")]
	FetchFailed,
	#[error("failed to post the message")]
	PostFailed,
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct BoardApi {
	client: reqwest::Client,
	messages_url: String,
}

impl BoardApi {
	pub fn new(base_url: &str) -> Self {
		Self {
			client: reqwest::Client::new(),
			messages_url: format!("{}/messages", base_url.trim_end_matches('/')),
		}
	}

	pub async fn list(&self) -> Result<Vec<Message>, ClientError> {
		let response = self.client.get(&self.messages_url).send().await?;
		if !response.status().is_success() {
			return Err(ClientError::FetchFailed);
		}
		Ok(response.json().await?)
	}

	pub async fn create(
		&self,
		text: &str,
	) -> Result<(), ClientError> {
		let response = self.client.post(&self.messages_url).json(&json!({ "message": text })).send().await?;
		if !response.status().is_success() {
			return Err(ClientError::PostFailed);
		}
		// The stored record is picked up by the next list call.
		Ok(())
	}
}
