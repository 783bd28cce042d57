//! Query-string parsing into a request intent.
//!
//! # Responsibilities
//! - Decode three selection syntaxes: `?links=li,tg`, dot-compound keys
//!   like `?wa.li=12345`, and bare title keys like `?gh&tg`
//! - Collect per-title value overrides from key values
//! - Detect the `qr` flag in any position
//!
//! # Design Decisions
//! - `links=` takes over selection entirely; other keys are ignored for it
//! - Any `qr` occurrence (bare key, key segment, or `links=` token) turns
//!   QR mode on — one rule, no positional special cases
//! - Zero collected titles means "absent" so host defaults apply
//! - First-seen order, duplicates removed

use std::collections::HashMap;

/// What a request asked for, derived from its query string.
#[derive(Debug, Clone, Default)]
pub struct RequestIntent {
    /// Explicitly requested titles, or `None` to use host defaults.
    pub requested: Option<Vec<String>>,
    /// Literal value overrides keyed by title/alias, lowercased.
    pub overrides: HashMap<String, String>,
    /// Whether QR markup must be rendered into the response.
    pub qr_mode: bool,
}

/// Parse a raw query string (without the leading `?`).
pub fn parse_query(query: &str) -> RequestIntent {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    let mut qr_mode = pairs.iter().any(|(k, _)| k == "qr");
    let mut overrides = HashMap::new();
    let mut titles: Vec<String> = Vec::new();

    // Explicit ?links=li,tg format takes over selection entirely.
    let links_value = pairs
        .iter()
        .find(|(k, _)| k == "links")
        .map(|(_, v)| v.as_str());

    if let Some(list) = links_value {
        for token in list.split(['.', ',']) {
            let token = token.trim().to_lowercase();
            if token.is_empty() {
                continue;
            }
            if token == "qr" {
                qr_mode = true;
                continue;
            }
            if !titles.contains(&token) {
                titles.push(token);
            }
        }
    } else {
        for (key, value) in &pairs {
            if key == "qr" {
                continue;
            }
            for segment in key.split('.') {
                let segment = segment.trim().to_lowercase();
                if segment.is_empty() {
                    continue;
                }
                if segment == "qr" {
                    qr_mode = true;
                    continue;
                }
                if !titles.contains(&segment) {
                    titles.push(segment.clone());
                }
                if !value.is_empty() {
                    overrides.insert(segment, value.clone());
                }
            }
        }
    }

    RequestIntent {
        requested: if titles.is_empty() { None } else { Some(titles) },
        overrides,
        qr_mode,
    }
}
