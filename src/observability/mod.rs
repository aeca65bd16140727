//! Observability subsystem.
//!
//! The loader itself stays silent; the binary installs a tracing subscriber
//! and logs load outcomes on behalf of the library.

pub mod logging;

pub use logging::init_logging;
