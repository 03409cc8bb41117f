use board::{bootstrap::Bootstrap, dependencies::config, routes::create_app};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Dependencies
	let state = Bootstrap::board_state(config).await?;
	let app = create_app(state, config)?;

	tracing::info!("Start Web Server on {}...", config.server_ip_port);
	let listener = tokio::net::TcpListener::bind(&config.server_ip_port).await?;
	axum::serve(listener, app).await?;

	Ok(())
}
