//! Route handlers.
//!
//! # Responsibilities
//! - Link listing (JSON), with optional QR markup
//! - Slug redirects (301 to URL or URI scheme)
//! - Metadata endpoints (robots.txt, sitemap.xml)
//! - Upstream scrape proxy with structured error payloads
//!
//! # Design Decisions
//! - Unknown requested titles are dropped silently
//! - Missing link values omit the link, never error
//! - QR markup is rendered only when the request asked for it

use axum::{
    extract::{Path, RawQuery, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE, HOST, LOCATION},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::http::server::AppState;
use crate::links::hosts::default_titles;
use crate::links::params::parse_query;
use crate::links::redirects;
use crate::links::resolver::{resolve, ResolvedLink};
use crate::qr::DEFAULT_SIZE;

/// Listing response body.
#[derive(Debug, Serialize)]
pub struct LinksListing {
    pub hostname: String,
    pub qr_mode: bool,
    pub links: Vec<ResolvedLink>,
}

/// Hostname from the Host header, port stripped.
fn hostname(headers: &HeaderMap) -> String {
    headers
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(':').next())
        .unwrap_or("localhost")
        .to_string()
}

fn build_listing(state: &AppState, hostname: String, query: &str, force_qr: bool) -> LinksListing {
    let mut intent = parse_query(query);
    if force_qr {
        intent.qr_mode = true;
    }

    let titles: Vec<String> = match &intent.requested {
        Some(titles) => titles.clone(),
        None => default_titles(&hostname)
            .iter()
            .map(|t| t.to_string())
            .collect(),
    };

    let mut links: Vec<ResolvedLink> = Vec::new();
    for title in &titles {
        let Some(entry) = state.registry.find(title) else {
            tracing::debug!(%title, "Requested title not in registry");
            continue;
        };

        let override_value = intent
            .overrides
            .get(&entry.template.title)
            .or_else(|| intent.overrides.get(&entry.template.alias))
            .map(String::as_str);

        let Some(mut link) = resolve(&entry.template, override_value, entry.value.as_deref())
        else {
            continue;
        };

        if intent.qr_mode {
            link.qr = Some(state.qr.svg(&link.url, DEFAULT_SIZE));
        }

        if !links.iter().any(|l| l.title == link.title) {
            links.push(link);
        }
    }

    LinksListing {
        hostname,
        qr_mode: intent.qr_mode,
        links,
    }
}

/// `GET /` — resolved link listing for this host and query.
pub async fn list_links(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Json<LinksListing> {
    let listing = build_listing(
        &state,
        hostname(&headers),
        query.as_deref().unwrap_or(""),
        false,
    );
    Json(listing)
}

/// `GET /qr` — same listing with QR markup always rendered.
pub async fn list_links_qr(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Json<LinksListing> {
    let listing = build_listing(
        &state,
        hostname(&headers),
        query.as_deref().unwrap_or(""),
        true,
    );
    Json(listing)
}

/// `GET /{slug}` — permanent redirect from the static table.
pub async fn redirect_slug(Path(slug): Path<String>) -> Response {
    match redirects::destination(&slug.to_lowercase()) {
        Some(target) => (
            StatusCode::MOVED_PERMANENTLY,
            [(LOCATION, target)],
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "not_found", "message": "Not found" })),
        )
            .into_response(),
    }
}

/// `GET /robots.txt`
pub async fn robots() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain")],
        "User-agent: *\nCrawl-delay: 1\nAllow: /\n",
    )
}

/// `GET /sitemap.xml`
pub async fn sitemap(headers: HeaderMap) -> impl IntoResponse {
    let origin = format!("https://{}", hostname(&headers));
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>{origin}/</loc><priority>1.0</priority><changefreq>weekly</changefreq></url>
</urlset>
"#
    );
    ([(CONTENT_TYPE, "application/xml")], body)
}

/// `GET /api/lote` — proxy the upstream form workflow.
///
/// Upstream JSON is returned verbatim with a short cache window; any
/// failure collapses into one structured 500 payload.
pub async fn scrape_proxy(State(state): State<AppState>) -> Response {
    match state.scrape.fetch().await {
        Ok(value) => (
            [(CACHE_CONTROL, "max-age=300")],
            Json(value),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Upstream scrape failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
