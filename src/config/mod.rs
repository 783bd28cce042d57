//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional via --config)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overlay: bind address, link values)
//!     → validation.rs (semantic checks)
//!     → ServeConfig (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow running with no config file
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every error, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ListenerConfig;
pub use schema::ScrapeConfig;
pub use schema::ServeConfig;
