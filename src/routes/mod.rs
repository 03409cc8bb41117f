mod messages;

use axum::{
	http::{HeaderValue, Method},
	routing::get,
	Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
	cors::{AllowOrigin, Any, CorsLayer},
	trace::TraceLayer,
};

use crate::{
	config::Config,
	services::{response::ServiceError, state::BoardState},
};

pub use self::messages::message_routers;

async fn healthcheck() -> Json<Value> {
	Json(json!({"status": "healthy"}))
}

/// Builds the CORS layer from a comma separated origin list, `*` allowing any.
pub fn cors_layer(allow_origins: &str) -> Result<CorsLayer, ServiceError> {
	let allow_origin = if allow_origins.trim() == "*" {
		AllowOrigin::from(Any)
	} else {
		let origins = allow_origins
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(|origin| {
				origin
					.parse::<HeaderValue>()
					.map_err(|_| ServiceError::InvalidConfig(format!("invalid origin `{origin}`")))
			})
			.collect::<Result<Vec<_>, _>>()?;
		AllowOrigin::list(origins)
	};

	Ok(CorsLayer::new().allow_origin(allow_origin).allow_headers(Any).allow_methods([
		Method::GET,
		Method::POST,
		Method::PATCH,
		Method::PUT,
		Method::DELETE,
		Method::OPTIONS,
		Method::HEAD,
	]))
}

pub fn create_app(
	state: BoardState,
	config: &Config,
) -> Result<Router, ServiceError> {
	let app = Router::new()
		.route("/healthcheck", get(healthcheck))
		.merge(message_routers())
		.with_state(state)
		.layer(cors_layer(&config.allow_origins)?)
		.layer(TraceLayer::new_for_http());
	Ok(app)
}
