use axum::{
	extract::{rejection::JsonRejection, State},
	http::StatusCode,
	response::IntoResponse,
	routing::get,
	Json, Router,
};

use crate::{
	domain::message::{commands::CreateMessage, Message},
	services::{handlers::MessageHandler, response::ServiceError, state::BoardState},
};

#[axum_macros::debug_handler]
async fn list_messages_route(State(state): State<BoardState>) -> Result<Json<Vec<Message>>, ServiceError> {
	let messages = MessageHandler::list_messages(&state).await?;
	Ok(Json(messages))
}

#[axum_macros::debug_handler]
async fn create_message_route(
	State(state): State<BoardState>,
	payload: Result<Json<CreateMessage>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
	let Json(command) = payload.map_err(|rejection| ServiceError::BadRequest(rejection.status(), rejection.body_text()))?;

	let message = MessageHandler::create_message(command, &state).await?;
	Ok((StatusCode::CREATED, Json(message)))
}

pub fn message_routers() -> Router<BoardState> {
	Router::new().route("/messages", get(list_messages_route).post(create_message_route))
}
