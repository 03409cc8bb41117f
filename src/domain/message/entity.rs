use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
	pub id: i64,
	pub content: String,
	pub created_at: DateTime<Utc>,
}

impl Message {
	/// Listing order: most recent first, newer id first on equal timestamps.
	pub fn recency_order(
		a: &Message,
		b: &Message,
	) -> std::cmp::Ordering {
		b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
	}
}
