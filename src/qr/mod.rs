//! QR rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Destination URL
//!     → svg.rs (encode to module matrix, emit <rect> per dark module)
//!     → shuffle.rs (seeded Fisher-Yates ordering for animation)
//!     → cache.rs (process-lifetime memoization keyed by text + size)
//! ```
//!
//! # Design Decisions
//! - Encoding delegated to the `qrcode` crate; never reimplemented
//! - Rect emission order is deterministic per input text
//! - Encoding failure degrades to an empty SVG, never a request failure

pub mod cache;
pub mod shuffle;
pub mod svg;

pub use cache::QrCache;
pub use svg::render_svg;

/// Default rendered size in logical pixels.
pub const DEFAULT_SIZE: u32 = 164;
