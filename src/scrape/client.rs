//! Two-step CSRF-guarded form submission client.

use std::sync::OnceLock;

use regex::Regex;
use reqwest::header::{ACCEPT, REFERER, USER_AGENT};
use thiserror::Error;

use crate::config::schema::ScrapeConfig;

/// Errors from the upstream scraping workflow.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure at either step.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Select page returned a non-success status.
    #[error("failed to fetch select page: {0}")]
    SelectStatus(u16),

    /// The hidden token input was not present in the select page.
    #[error("CSRF token not found")]
    MissingToken,

    /// Submission returned a non-success status.
    #[error("POST request failed: {0}")]
    SubmitStatus(u16),
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"<input[^>]*name="_token"[^>]*value="([^"]*)"[^>]*>"#)
            .expect("token pattern is valid")
    })
}

/// Extract the hidden CSRF token from the select page HTML.
pub fn extract_token(html: &str) -> Option<&str> {
    token_pattern()
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Client for the upstream form workflow.
///
/// The reqwest client keeps a cookie store so the session cookies set by
/// the select page accompany the submission.
pub struct ScrapeClient {
    http: reqwest::Client,
    config: ScrapeConfig,
}

impl ScrapeClient {
    pub fn new(config: ScrapeConfig) -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");
        Self { http, config }
    }

    /// Run the two-step workflow and return the upstream JSON verbatim.
    pub async fn fetch(&self) -> Result<serde_json::Value, ScrapeError> {
        let select = self
            .http
            .get(&self.config.select_url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;

        if !select.status().is_success() {
            return Err(ScrapeError::SelectStatus(select.status().as_u16()));
        }

        let html = select.text().await?;
        let token = extract_token(&html).ok_or(ScrapeError::MissingToken)?;

        let mut form = self.config.form_fields.clone();
        form.push(("_token".to_string(), token.to_string()));

        let submit = self
            .http
            .post(&self.config.post_url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(REFERER, &self.config.select_url)
            .header(ACCEPT, "application/json, text/plain, */*")
            .header("X-Requested-With", "XMLHttpRequest")
            .form(&form)
            .send()
            .await?;

        if !submit.status().is_success() {
            return Err(ScrapeError::SubmitStatus(submit.status().as_u16()));
        }

        Ok(submit.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token() {
        let html = r#"<form method="POST">
            <input type="hidden" name="_token" value="abc123XYZ">
            <input name="provinces" value="Barcelona">
        </form>"#;
        assert_eq!(extract_token(html), Some("abc123XYZ"));
    }

    #[test]
    fn test_extract_token_attribute_order() {
        let html = r#"<input value="tok" other="x" name="_token">"#;
        // value before name is not matched; the upstream always renders
        // the name attribute ahead of value.
        assert_eq!(extract_token(html), None);

        let html = r#"<input type="hidden" name="_token" class="c" value="tok">"#;
        assert_eq!(extract_token(html), Some("tok"));
    }

    #[test]
    fn test_extract_token_missing() {
        assert_eq!(extract_token("<html><body>no form</body></html>"), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ScrapeError::MissingToken.to_string(),
            "CSRF token not found"
        );
        assert_eq!(
            ScrapeError::SelectStatus(503).to_string(),
            "failed to fetch select page: 503"
        );
    }
}
