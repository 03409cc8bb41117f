use std::sync::OnceLock;

use crate::{config::Config, services::response::ServiceError};

pub fn config() -> Result<&'static Config, ServiceError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	if let Some(config) = CONFIG.get() {
		return Ok(config);
	}
	let config = Config::new()?;
	Ok(CONFIG.get_or_init(|| config))
}
