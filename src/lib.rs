//! Personal link-in-bio service.
//!
//! Resolves short aliases to destination URLs, renders social/contact
//! links with deterministically animated QR codes, and proxies an
//! upstream CSRF-guarded form workflow.

pub mod config;
pub mod http;
pub mod links;
pub mod qr;
pub mod scrape;

pub use config::ServeConfig;
pub use http::HttpServer;
