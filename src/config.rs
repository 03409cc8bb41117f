use std::time::Duration;

use crate::services::response::ServiceError;

pub const DEFAULT_TRANSFORM_URL: &str = "http://localhost:8081/process";

#[derive(Clone, Debug)]
pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,

	/// Postgres url. Messages are kept in memory when unset.
	pub database_url: Option<String>,
	pub max_connections: u32,
	pub allow_origins: String,

	/// Endpoint of the external transform service
	pub transform_url: String,
	pub transform_timeout: Duration,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("info".to_string());
		let server_ip_port = lookup("SERVER_IP_PORT").unwrap_or("0.0.0.0:3000".into());
		let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
		let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 30)?;
		let allow_origins = lookup("ALLOW_ORIGINS").unwrap_or("*".to_string());
		let transform_url = lookup("TRANSFORM_URL").unwrap_or(DEFAULT_TRANSFORM_URL.to_string());
		let transform_timeout = Duration::from_secs(parse_or(&lookup, "TRANSFORM_TIMEOUT_SECS", 10)?);

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			max_connections,
			allow_origins,
			transform_url,
			transform_timeout,
		})
	}
}

fn parse_or<T: std::str::FromStr>(
	lookup: &impl Fn(&str) -> Option<String>,
	key: &str,
	default: T,
) -> Result<T, ServiceError> {
	match lookup(key) {
		None => Ok(default),
		Some(raw) => raw
			.trim()
			.parse()
			.map_err(|_| ServiceError::InvalidConfig(format!("{key} must be a number, got `{raw}`"))),
	}
}
