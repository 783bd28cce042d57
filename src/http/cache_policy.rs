//! Response cache-control policy.
//!
//! # Responsibilities
//! - Classify request paths into cache classes
//! - Set `Cache-Control` on responses that did not choose their own
//!
//! # Design Decisions
//! - Pure classification function, no state
//! - No regex in the hot path (extension and substring checks only)
//! - Handlers that set their own directive win

use axum::{
    extract::Request,
    http::header::CACHE_CONTROL,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};

const IMMUTABLE_EXTENSIONS: &[&str] = &["js", "css", "woff2", "ttf", "otf", "eot"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "ico", "svg"];
const METADATA_MARKERS: &[&str] = &["manifest", "browserconfig", "robots", "sitemap"];

/// Map a request path to its cache-control directive.
pub fn directive_for(path: &str) -> &'static str {
    let lower = path.to_lowercase();
    let extension = lower.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

    if lower.contains("/immutable/") || IMMUTABLE_EXTENSIONS.contains(&extension) {
        // Versioned/hashed assets never change in place.
        "public, max-age=31536000, immutable"
    } else if IMAGE_EXTENSIONS.contains(&extension) {
        "public, max-age=2592000"
    } else if lower == "/"
        || extension == "html"
        || lower.starts_with("/apple")
        || lower.starts_with("/imessage")
    {
        "public, max-age=3600, must-revalidate"
    } else if METADATA_MARKERS.iter().any(|m| lower.contains(m)) {
        "public, max-age=86400"
    } else {
        "public, max-age=3600"
    }
}

/// Middleware applying [`directive_for`] to responses without a directive.
pub async fn apply_cache_policy(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    if !response.headers().contains_key(CACHE_CONTROL) {
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static(directive_for(&path)));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immutable_assets() {
        assert_eq!(
            directive_for("/_app/immutable/chunk.abc123.js"),
            "public, max-age=31536000, immutable"
        );
        assert_eq!(
            directive_for("/fonts/inter.woff2"),
            "public, max-age=31536000, immutable"
        );
    }

    #[test]
    fn test_images() {
        assert_eq!(directive_for("/icons/logo.PNG"), "public, max-age=2592000");
        assert_eq!(directive_for("/qr.svg"), "public, max-age=2592000");
    }

    #[test]
    fn test_html_routes() {
        assert_eq!(directive_for("/"), "public, max-age=3600, must-revalidate");
        assert_eq!(
            directive_for("/about.html"),
            "public, max-age=3600, must-revalidate"
        );
        assert_eq!(
            directive_for("/imessage"),
            "public, max-age=3600, must-revalidate"
        );
    }

    #[test]
    fn test_metadata_files() {
        assert_eq!(directive_for("/robots.txt"), "public, max-age=86400");
        assert_eq!(directive_for("/sitemap.xml"), "public, max-age=86400");
        assert_eq!(directive_for("/site.webmanifest"), "public, max-age=86400");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(directive_for("/gh"), "public, max-age=3600");
    }
}
