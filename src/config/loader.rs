//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServeConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::links::registry::parse_custom_links;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration.
///
/// A missing path falls back to defaults. Environment variables overlay the
/// file: `LINKPAGE_BIND`, `PHONE_NUMBER`, `WHATSAPP_NUMBER`, and
/// `CUSTOM_LINKS` (a JSON array of custom link records).
pub fn load_config(path: Option<&Path>) -> Result<ServeConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ServeConfig::default(),
    };

    apply_env(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment variables onto the loaded configuration.
fn apply_env(config: &mut ServeConfig) {
    if let Ok(bind) = std::env::var("LINKPAGE_BIND") {
        config.listener.bind_address = bind;
    }
    if let Ok(phone) = std::env::var("PHONE_NUMBER") {
        config.links.phone_number = Some(phone);
    }
    if let Ok(whatsapp) = std::env::var("WHATSAPP_NUMBER") {
        config.links.whatsapp_number = Some(whatsapp);
    }
    if let Ok(raw) = std::env::var("CUSTOM_LINKS") {
        let (accepted, rejected) = parse_custom_links(&raw);
        for diagnostic in &rejected {
            tracing::warn!(%diagnostic, "Dropping invalid custom link entry");
        }
        config.links.custom.extend(accepted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_nonexistent_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/linkpage.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
