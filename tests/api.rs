//! End-to-end tests driving the router without a live listener.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use linkpage::config::ServeConfig;
use linkpage::http::server::{AppState, HttpServer};
use linkpage::links::registry::Registry;
use linkpage::qr::QrCache;
use linkpage::scrape::ScrapeClient;

fn test_router(env_values: &[(&str, &str)]) -> axum::Router {
    let mut config = ServeConfig::default();
    // No network calls in tests.
    config.scrape.enabled = false;

    let values: HashMap<String, String> = env_values
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let state = AppState {
        registry: Arc::new(Registry::build(&values, &config.links.custom)),
        qr: QrCache::new(),
        scrape: Arc::new(ScrapeClient::new(config.scrape.clone())),
    };

    HttpServer::build_router(&config, state)
}

async fn get_json(router: axum::Router, uri: &str, host: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::HOST, host)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn titles(listing: &Value) -> Vec<String> {
    listing["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_unknown_host_gets_fallback_defaults() {
    let (status, body) = get_json(test_router(&[]), "/", "localhost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hostname"], "localhost");
    assert_eq!(body["qr_mode"], false);
    assert_eq!(
        titles(&body),
        vec!["instagram", "linkedin", "bluesky", "telegram"]
    );
}

#[tokio::test]
async fn test_known_host_defaults() {
    let (_, body) = get_json(test_router(&[]), "/", "zenfo.co:443").await;
    assert_eq!(body["hostname"], "zenfo.co");
    assert_eq!(titles(&body), vec!["instagram", "bluesky", "telegram"]);
}

#[tokio::test]
async fn test_links_param_selects_exactly() {
    let (_, body) = get_json(test_router(&[]), "/?links=li,tg", "localhost").await;
    assert_eq!(titles(&body), vec!["linkedin", "telegram"]);
    assert_eq!(body["qr_mode"], false);
}

#[tokio::test]
async fn test_qr_mode_attaches_markup() {
    let (_, body) = get_json(test_router(&[]), "/?links=gh,qr", "localhost").await;
    assert_eq!(body["qr_mode"], true);
    let qr = body["links"][0]["qr"].as_str().unwrap();
    assert!(qr.starts_with("<svg "));
    assert!(qr.contains("<rect "));
}

#[tokio::test]
async fn test_qr_route_forces_qr_mode() {
    let (_, body) = get_json(test_router(&[]), "/qr?links=gh", "localhost").await;
    assert_eq!(body["qr_mode"], true);
    assert!(body["links"][0]["qr"].is_string());
}

#[tokio::test]
async fn test_templated_link_from_value_and_override() {
    let router = test_router(&[("WHATSAPP_NUMBER", "+1 (234) 567-8900")]);
    let (_, body) = get_json(router.clone(), "/?links=wa", "localhost").await;
    assert_eq!(body["links"][0]["url"], "https://wa.me/12345678900");

    // Per-request override wins over the configured value.
    let (_, body) = get_json(router, "/?wa=999", "localhost").await;
    assert_eq!(body["links"][0]["url"], "https://wa.me/999");
}

#[tokio::test]
async fn test_templated_link_without_value_is_omitted() {
    let (_, body) = get_json(test_router(&[]), "/?links=wa,gh", "localhost").await;
    assert_eq!(titles(&body), vec!["github"]);
}

#[tokio::test]
async fn test_unknown_titles_filtered_silently() {
    let (status, body) = get_json(test_router(&[]), "/?links=nope,gh", "localhost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["github"]);
}

#[tokio::test]
async fn test_redirect_known_slug() {
    let response = test_router(&[])
        .oneshot(
            Request::builder()
                .uri("/git")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://www.github.com/mrgnw"
    );
}

#[tokio::test]
async fn test_redirect_unknown_slug_is_not_found() {
    let (status, body) = get_json(test_router(&[]), "/definitely-not-a-slug", "localhost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_robots_txt() {
    let response = test_router(&[])
        .oneshot(
            Request::builder()
                .uri("/robots.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=86400"
    );
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert!(std::str::from_utf8(&bytes).unwrap().contains("User-agent: *"));
}

#[tokio::test]
async fn test_listing_cache_policy_applied() {
    let response = test_router(&[])
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::HOST, "localhost")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=3600, must-revalidate"
    );
}

#[tokio::test]
async fn test_scrape_route_absent_when_disabled() {
    let response = test_router(&[])
        .oneshot(
            Request::builder()
                .uri("/api/lote")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    // No route is registered for it, so the router answers 404.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
