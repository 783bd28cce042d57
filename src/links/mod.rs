//! Link resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (host header, query string)
//!     → params.rs (decode query into RequestIntent)
//!     → hosts.rs (default titles when no explicit selection)
//!     → registry.rs (built-in templates + custom-link layering)
//!     → resolver.rs (template + value → ResolvedLink or skip)
//!     → Ordered list of ResolvedLink for the response
//! ```
//!
//! # Design Decisions
//! - Registry built once at startup, immutable at runtime
//! - Lookups are case-sensitive on stored values; caller input is
//!   lowercased before lookup
//! - Missing values skip the template silently (omission, not error)
//! - Unknown requested titles are filtered out, never surfaced

pub mod hosts;
pub mod params;
pub mod redirects;
pub mod registry;
pub mod resolver;

pub use params::{parse_query, RequestIntent};
pub use registry::{CustomLink, LinkTemplate, RegisteredLink, Registry};
pub use resolver::{resolve, ResolvedLink};
