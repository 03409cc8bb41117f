use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::message::{Message, NewMessage};

use super::{MessageRepository, RepositoryError};

#[derive(Default)]
struct Table {
	last_id: i64,
	rows: Vec<Message>,
}

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct InMemoryMessageRepository {
	table: RwLock<Table>,
}

impl InMemoryMessageRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn len(&self) -> usize {
		self.table.read().await.rows.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.len().await == 0
	}
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
	async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
		let mut messages = self.table.read().await.rows.clone();
		messages.sort_by(Message::recency_order);
		Ok(messages)
	}

	async fn create(
		&self,
		content: String,
	) -> Result<Message, RepositoryError> {
		let new_message = NewMessage::try_from(content)?;

		let mut table = self.table.write().await;
		table.last_id += 1;
		let message = Message {
			id: table.last_id,
			content: new_message.into_content(),
			created_at: Utc::now(),
		};
		table.rows.push(message.clone());
		Ok(message)
	}
}
