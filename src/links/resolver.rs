//! Template-to-link resolution.
//!
//! # Responsibilities
//! - Combine a template with a per-request override and an ambient value
//! - Substitute the value into `{value}` URL templates
//! - Strip non-digits for numeric-only templates
//!
//! # Design Decisions
//! - Override beats ambient value beats nothing
//! - A templated link with no value resolves to nothing (skip, not error)
//! - Raw values never leak into the output, only the substituted URL

use serde::Serialize;

use crate::links::registry::LinkTemplate;

/// A template combined with a concrete value, ready to display.
///
/// Rebuilt per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedLink {
    pub title: String,
    pub alias: String,
    pub url: String,
    pub blurb: String,
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stroke_icon: bool,
    /// Rendered SVG markup, present only in QR mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr: Option<String>,
}

/// Resolve a template against an explicit override and an ambient value.
///
/// Returns `None` when a templated link has no value from either source;
/// the caller omits the link from the result list.
pub fn resolve(
    template: &LinkTemplate,
    override_value: Option<&str>,
    ambient_value: Option<&str>,
) -> Option<ResolvedLink> {
    let url = if let Some(fixed) = &template.url {
        fixed.clone()
    } else if let Some(pattern) = &template.url_template {
        let value = override_value.or(ambient_value).unwrap_or("");
        let value = if template.digits_only {
            value.chars().filter(|c| c.is_ascii_digit()).collect()
        } else {
            value.to_string()
        };
        if value.is_empty() {
            return None;
        }
        pattern.replace("{value}", &value)
    } else {
        // A template with neither url nor url_template defines nothing.
        return None;
    };

    Some(ResolvedLink {
        title: template.title.clone(),
        alias: template.alias.clone(),
        url,
        blurb: template.blurb.clone(),
        colors: template.colors.clone(),
        stroke_icon: template.stroke_icon,
        qr: None,
    })
}
