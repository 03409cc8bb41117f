pub mod in_memory;
pub mod message_repository;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::message::{Message, ValidationErrors};

pub use self::in_memory::InMemoryMessageRepository;
pub use self::message_repository::PgMessageRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
	#[error("validation failed: {0}")]
	Validation(ValidationErrors),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl From<ValidationErrors> for RepositoryError {
	fn from(value: ValidationErrors) -> Self {
		RepositoryError::Validation(value)
	}
}

/// Storage for board messages. Implementations assign `id` and `created_at`
/// and validate content before writing.
#[async_trait]
pub trait MessageRepository: Send + Sync {
	/// All messages, most recent first.
	async fn list(&self) -> Result<Vec<Message>, RepositoryError>;

	async fn create(
		&self,
		content: String,
	) -> Result<Message, RepositoryError>;
}
