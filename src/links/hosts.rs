//! Host-based default link selection.
//!
//! # Design Decisions
//! - Exact hostname match only (ports stripped by the caller)
//! - Unknown hostnames fall back to a fixed default list
//! - Consulted only when the query carried no explicit selection

/// Titles shown when a request to an unknown hostname carries no selection.
pub const FALLBACK_TITLES: &[&str] = &["instagram", "linkedin", "bluesky", "telegram"];

/// Default titles for a hostname.
pub fn default_titles(hostname: &str) -> &'static [&'static str] {
    match hostname {
        "morganwill.com" => &["linkedin", "github", "bluesky", "telegram", "cv"],
        "zenfo.co" => &["instagram", "bluesky", "telegram"],
        _ => FALLBACK_TITLES,
    }
}
