//! Static slug-to-destination redirect table.
//!
//! # Design Decisions
//! - Exact match on the lowercased path segment
//! - Destinations may be URLs or URI schemes (`sms:`)
//! - No match is a not-found signal, decided by the caller

/// Resolve a redirect slug to its destination.
pub fn destination(slug: &str) -> Option<&'static str> {
    let target = match slug {
        "github" | "git" => "https://www.github.com/mrgnw",
        "instagram" | "insta" => "https://www.instagram.com/zenfo.co/",
        "linkedin" | "li" => "https://www.linkedin.com/in/mrgnw/",
        "telegram" => "https://t.me/mrgnw",
        "twitter" | "tw" => "https://twitter.com/mrgnw",
        "photos" => "https://500px.com/morganw?view=licensing",
        "imessage" | "apple" => "sms:morgan@textme.cc",
        "cal" => "https://cal.com/mrgnw/hi",
        "dm" => "https://a.xcc.es/telegram",
        _ => return None,
    };
    Some(target)
}
