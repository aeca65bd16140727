//! API gateway configuration loader.
//!
//! Reads the gateway's JSON configuration and makes API version lookups
//! case-insensitive. Routing and proxying live in the gateway itself, which
//! consumes [`Config`] by field access or through [`Config::backend`].

pub mod config;
pub mod observability;

pub use config::{load_config, parse_config, Config, ConfigError};
