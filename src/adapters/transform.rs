//! Client for the external transform service.
//!
//! The service accepts `{"message": <raw>}` and answers with
//! `{"processed_message": <text>}`. Every way that exchange can go wrong is
//! surfaced as a [`TransformError`] so the gateway can answer with a
//! dedicated status instead of a bare 500.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::message::commands::{TransformRequest, TransformResponse};

#[derive(Debug, Error)]
pub enum TransformError {
	#[error("transform service unreachable: {0}")]
	Unavailable(#[source] reqwest::Error),
	#[error("transform service timed out")]
	Timeout,
	#[error("transform service answered with status {0}")]
	Status(u16),
	#[error("transform service returned an unparsable body: {0}")]
	Malformed(#[source] serde_json::Error),
}

impl From<reqwest::Error> for TransformError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			TransformError::Timeout
		} else {
			TransformError::Unavailable(err)
		}
	}
}

#[async_trait]
pub trait Transformer: Send + Sync {
	async fn transform(
		&self,
		message: &str,
	) -> Result<String, TransformError>;
}

pub struct HttpTransformClient {
	client: reqwest::Client,
	endpoint: String,
}

impl HttpTransformClient {
	pub fn new(
		endpoint: impl Into<String>,
		timeout: Duration,
	) -> Result<Self, reqwest::Error> {
		let client = reqwest::Client::builder().timeout(timeout).build()?;
		Ok(Self {
			client,
			endpoint: endpoint.into(),
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl Transformer for HttpTransformClient {
	async fn transform(
		&self,
		message: &str,
	) -> Result<String, TransformError> {
		let response = self.client.post(&self.endpoint).json(&TransformRequest { message }).send().await?;

		let status = response.status();
		if !status.is_success() {
			tracing::warn!(status = status.as_u16(), "transform service rejected message");
			return Err(TransformError::Status(status.as_u16()));
		}

		let body = response.bytes().await?;
		let payload: TransformResponse = serde_json::from_slice(&body).map_err(TransformError::Malformed)?;
		Ok(payload.processed_message)
	}
}
