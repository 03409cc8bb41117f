pub mod adapters;
pub mod bootstrap;
pub mod client;
pub mod config;
pub mod database;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod services;
