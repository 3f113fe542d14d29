//! Configuration management: defaults and loading from `config.json` + environment.

pub mod defaults;
pub mod service_config;

pub use service_config::ServiceConfig;
