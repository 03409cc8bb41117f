use std::sync::Arc;

use crate::{
	adapters::{
		repositories::{InMemoryMessageRepository, MessageRepository, PgMessageRepository},
		transform::HttpTransformClient,
	},
	config::Config,
	database::connection_pool,
	services::{response::ServiceError, state::BoardState},
};

pub struct Bootstrap;
impl Bootstrap {
	pub async fn board_state(config: &Config) -> Result<BoardState, ServiceError> {
		let repository = Self::repository(config).await?;

		let transformer = HttpTransformClient::new(config.transform_url.clone(), config.transform_timeout)
			.map_err(|err| ServiceError::InvalidConfig(format!("transform client: {err}")))?;
		tracing::info!(endpoint = transformer.endpoint(), "Transform service configured");

		Ok(BoardState::new(repository, Arc::new(transformer)))
	}

	async fn repository(config: &Config) -> Result<Arc<dyn MessageRepository>, ServiceError> {
		match config.database_url.as_deref() {
			Some(url) => {
				tracing::info!("Connections Are Being Pooled...");
				let pool = connection_pool(url, config).await?;
				Ok(Arc::new(PgMessageRepository::new(pool)))
			}
			None => {
				tracing::warn!("DATABASE_URL not set, messages are kept in memory");
				Ok(Arc::new(InMemoryMessageRepository::new()))
			}
		}
	}
}
