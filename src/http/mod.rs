//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request
//!     → request.rs (request ID, as early as possible)
//!     → server.rs (axum router, timeout, tracing)
//!     → handlers.rs (listing, redirects, metadata, scrape proxy)
//!     → cache_policy.rs (Cache-Control on the way out)
//! ```

pub mod cache_policy;
pub mod handlers;
pub mod request;
pub mod server;

pub use server::{AppState, HttpServer};
