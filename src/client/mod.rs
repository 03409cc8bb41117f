//! Board client: a thin HTTP wrapper over the gateway and the view state a
//! front end keeps on top of it.

mod api;
mod app;

pub use self::api::{BoardApi, ClientError, DEFAULT_API_URL};
pub use self::app::ClientApp;
