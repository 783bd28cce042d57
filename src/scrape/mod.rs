//! Upstream form-scraping subsystem.
//!
//! # Data Flow
//! ```text
//! GET select page → extract hidden CSRF token (regex)
//!     → POST fixed form fields + token (cookies carried over)
//!     → upstream JSON returned verbatim
//! ```
//!
//! # Design Decisions
//! - Two sequential requests, no retry
//! - Any failure (status, missing token) surfaces as one ScrapeError,
//!   converted to a structured 500 payload at the handler

pub mod client;

pub use client::{ScrapeClient, ScrapeError};
