use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
	database::DatabaseExecutor,
	domain::message::{Message, NewMessage},
};

use super::{MessageRepository, RepositoryError};

pub struct PgMessageRepository {
	pool: PgPool,
}

impl PgMessageRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
	async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
		let messages = sqlx::query_as::<_, Message>(
			r#"
			SELECT id, content, created_at
			FROM messages
			ORDER BY created_at DESC, id DESC
			"#,
		)
		.fetch_all(&self.pool)
		.await?;
		Ok(messages)
	}

	async fn create(
		&self,
		content: String,
	) -> Result<Message, RepositoryError> {
		let new_message = NewMessage::try_from(content)?;

		let mut executor = DatabaseExecutor::new(self.pool.clone());
		executor.begin().await?;

		let inserted = sqlx::query_as::<_, Message>(
			r#"
			INSERT INTO messages (content)
			VALUES ($1)
			RETURNING id, content, created_at
			"#,
		)
		.bind(new_message.content())
		.fetch_one(&mut **executor.transaction()?)
		.await;

		match inserted {
			Ok(message) => {
				executor.commit().await?;
				Ok(message)
			}
			Err(err) => {
				tracing::error!("Failed to insert message: {:?}", err);
				if let Err(rollback_err) = executor.rollback().await {
					tracing::error!("Rollback after failed insert also failed: {:?}", rollback_err);
				}
				Err(err.into())
			}
		}
	}
}
