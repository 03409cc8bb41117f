use crate::domain::message::{commands::CreateMessage, Message};

use super::{response::ServiceError, state::BoardState};

pub struct MessageHandler;
impl MessageHandler {
	pub async fn list_messages(state: &BoardState) -> Result<Vec<Message>, ServiceError> {
		Ok(state.repository.list().await?)
	}

	/// Sends the raw text through the transform service and stores only the
	/// processed result. Nothing is written when the transform fails.
	#[tracing::instrument(skip_all)]
	pub async fn create_message(
		command: CreateMessage,
		state: &BoardState,
	) -> Result<Message, ServiceError> {
		let processed = state.transformer.transform(&command.message).await?;

		let message = state.repository.create(processed).await.map_err(|err| {
			tracing::warn!("Discarding processed message: {}", err);
			err
		})?;

		tracing::info!(id = message.id, "message created");
		Ok(message)
	}
}
