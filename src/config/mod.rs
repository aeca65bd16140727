//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → loader.rs (read & deserialize)
//!     → normalize_versions (lowercase version keys)
//!     → Config (immutable, shared via Arc by the gateway)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Version lookups are case-insensitive, path prefixes are not
//! - Loading either returns a complete Config or an error, never a partial one

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_async, normalize_versions, parse_config, parse_config_str,
    ConfigError,
};
pub use schema::{Config, PrefixMap};
