//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check identifier uniqueness across built-in and custom links
//! - Validate the bind address and scrape URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServeConfig;
use crate::links::registry::builtin_templates;

/// A single semantic configuration problem.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address {0:?}")]
    BindAddress(String),

    #[error("custom link name {0:?} collides with an existing title or alias")]
    DuplicateName(String),

    #[error("invalid {field} URL {value:?}")]
    ScrapeUrl { field: &'static str, value: String },
}

/// Validate semantic constraints, collecting every violation.
pub fn validate_config(config: &ServeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let mut taken: HashSet<String> = HashSet::new();
    for template in builtin_templates() {
        taken.insert(template.title);
        taken.insert(template.alias);
    }
    for custom in &config.links.custom {
        for name in [&custom.name, &custom.alias].into_iter().flatten() {
            if !taken.insert(name.to_lowercase()) {
                errors.push(ValidationError::DuplicateName(name.clone()));
            }
        }
    }

    if config.scrape.enabled {
        for (field, value) in [
            ("select_url", &config.scrape.select_url),
            ("post_url", &config.scrape.post_url),
        ] {
            if url::Url::parse(value).is_err() {
                errors.push(ValidationError::ScrapeUrl {
                    field,
                    value: value.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::registry::CustomLink;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServeConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = ServeConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.scrape.select_url = "not a url".to_string();
        config.links.custom.push(CustomLink {
            link_type: "phone".to_string(),
            value: "1".to_string(),
            name: Some("github".to_string()),
            alias: None,
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_custom_name_collision() {
        let mut config = ServeConfig::default();
        config.links.custom.push(CustomLink {
            link_type: "whatsapp".to_string(),
            value: "1".to_string(),
            name: Some("WA".to_string()),
            alias: None,
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::DuplicateName(_)));
    }
}
