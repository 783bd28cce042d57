//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the link
//! service. All types derive Serde traits for deserialization from config
//! files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::links::registry::CustomLink;

/// Root configuration for the link service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServeConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Values for templated links and custom link definitions.
    pub links: LinkValuesConfig,

    /// Upstream form-scraping proxy settings.
    pub scrape: ScrapeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ServeConfig {
    /// Ambient values for templated links, keyed by variable name.
    pub fn link_values(&self) -> HashMap<String, String> {
        let mut values = HashMap::new();
        if let Some(phone) = &self.links.phone_number {
            values.insert("PHONE_NUMBER".to_string(), phone.clone());
        }
        if let Some(whatsapp) = &self.links.whatsapp_number {
            values.insert("WHATSAPP_NUMBER".to_string(), whatsapp.clone());
        }
        values
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Values feeding templated and custom links.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LinkValuesConfig {
    /// Value for the `phone` template.
    pub phone_number: Option<String>,

    /// Value for the `whatsapp` template.
    pub whatsapp_number: Option<String>,

    /// Additional link definitions layered onto the built-in registry.
    pub custom: Vec<CustomLink>,
}

/// Upstream form-scraping proxy configuration.
///
/// The upstream guards its submission endpoint behind a CSRF token hidden
/// in the select page; the proxy fetches the page, extracts the token, and
/// replays the fixed form fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Enable the proxy route.
    pub enabled: bool,

    /// Page carrying the hidden CSRF token.
    pub select_url: String,

    /// Form submission endpoint.
    pub post_url: String,

    /// Fixed form fields submitted alongside the token.
    pub form_fields: Vec<(String, String)>,

    /// User-Agent presented to the upstream.
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            select_url: "https://form24.es/en/lote/select".to_string(),
            post_url: "https://form24.es/en/get/lote".to_string(),
            form_fields: vec![
                ("provinces".to_string(), "Barcelona".to_string()),
                (
                    "officine".to_string(),
                    "webparainmigrantes.com/numero-lote-nie-mallorca-213-de-barcelona/".to_string(),
                ),
                ("officine_id".to_string(), "56".to_string()),
            ],
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.6 Safari/605.1.15"
                .to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServeConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(config.scrape.enabled);
        assert!(config.links.phone_number.is_none());
        assert!(config.link_values().is_empty());
    }

    #[test]
    fn test_minimal_toml() {
        let config: ServeConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [links]
            whatsapp_number = "+1 234"

            [[links.custom]]
            type = "phone"
            value = "555"
            name = "work"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(
            config.link_values().get("WHATSAPP_NUMBER").map(String::as_str),
            Some("+1 234")
        );
        assert_eq!(config.links.custom.len(), 1);
        assert_eq!(config.links.custom[0].link_type, "phone");
    }
}
