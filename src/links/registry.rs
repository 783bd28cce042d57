//! Link template registry.
//!
//! # Responsibilities
//! - Define the built-in, ordered set of link templates
//! - Layer runtime-supplied custom links on top of the built-ins
//! - Auto-number duplicate custom links of the same type
//! - Look up entries by title or alias (stored lowercase)
//!
//! # Design Decisions
//! - Registry is immutable after construction (thread-safe without locks)
//! - Unknown custom-link types are dropped with a warning, not an error
//! - No duplicate titles/aliases among built-ins; enforced by tests and
//!   config validation, not at runtime

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static definition of a possible outbound link, independent of any request.
#[derive(Debug, Clone, Serialize)]
pub struct LinkTemplate {
    /// Unique identifier, stored lowercase.
    pub title: String,
    /// Short alternate identifier, stored lowercase.
    pub alias: String,
    /// Fixed destination. Wins over `url_template` if both are set.
    pub url: Option<String>,
    /// Destination template containing a single `{value}` placeholder.
    pub url_template: Option<String>,
    /// Environment variable that supplies the value when no override is given.
    pub required_var: Option<String>,
    /// Human-readable description (display only).
    pub blurb: String,
    /// Brand colors (display only).
    pub colors: Vec<String>,
    /// Icon uses stroke instead of fill (display only).
    pub stroke_icon: bool,
    /// Value must be reduced to digits before substitution.
    pub digits_only: bool,
}

impl LinkTemplate {
    fn fixed(title: &str, alias: &str, url: &str, blurb: &str, colors: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            alias: alias.to_string(),
            url: Some(url.to_string()),
            url_template: None,
            required_var: None,
            blurb: blurb.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            stroke_icon: false,
            digits_only: false,
        }
    }

    fn templated(
        title: &str,
        alias: &str,
        url_template: &str,
        required_var: &str,
        blurb: &str,
        colors: &[&str],
    ) -> Self {
        Self {
            title: title.to_string(),
            alias: alias.to_string(),
            url: None,
            url_template: Some(url_template.to_string()),
            required_var: Some(required_var.to_string()),
            blurb: blurb.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            stroke_icon: false,
            digits_only: false,
        }
    }
}

/// The built-in template list, in display order.
pub fn builtin_templates() -> Vec<LinkTemplate> {
    vec![
        LinkTemplate::fixed(
            "instagram",
            "ig",
            "https://instagram.com/zenfo.co",
            "Instagram photo portfolio",
            &["#833ab4", "#fd1d1d", "#fcb045"],
        ),
        LinkTemplate::fixed(
            "linkedin",
            "li",
            "https://linkedin.com/in/mrgnw",
            "LinkedIn profile",
            &["#0A66C2", "#004182"],
        ),
        LinkTemplate {
            stroke_icon: true,
            ..LinkTemplate::fixed(
                "github",
                "gh",
                "https://github.com/mrgnw",
                "GitHub profile",
                &["#6e5494", "#24292e"],
            )
        },
        LinkTemplate::fixed(
            "blog",
            "blog",
            "https://blog.morganwill.com",
            "Blog",
            &["#ff6b6b", "#ee5a24"],
        ),
        LinkTemplate::fixed(
            "bluesky",
            "bsky",
            "https://bsky.app/profile/xcc.es",
            "Bluesky profile",
            &["#0085ff", "#00c2ff"],
        ),
        LinkTemplate {
            stroke_icon: true,
            ..LinkTemplate::fixed(
                "telegram",
                "tg",
                "https://t.me/mrgnw",
                "Message on Telegram",
                &["#26A5E4", "#0088cc"],
            )
        },
        LinkTemplate::fixed(
            "resume",
            "cv",
            "https://cv.morganwill.com/",
            "View my résumé/cv in HTML or download a PDF",
            &["#2d3748", "#1a202c"],
        ),
        LinkTemplate::templated(
            "phone",
            "ph",
            "tel:{value}",
            "PHONE_NUMBER",
            "Call me",
            &["#34c759", "#28a745"],
        ),
        LinkTemplate {
            digits_only: true,
            ..LinkTemplate::templated(
                "whatsapp",
                "wa",
                "https://wa.me/{value}",
                "WHATSAPP_NUMBER",
                "Message on WhatsApp",
                &["#25D366", "#128C7E"],
            )
        },
    ]
}

/// Runtime-supplied custom link definition.
///
/// `type` names a built-in template; `value` is substituted into its URL
/// template. `name`/`alias` override the auto-numbered identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomLink {
    #[serde(rename = "type")]
    pub link_type: String,
    pub value: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
}

/// Parse a custom-links JSON document defensively.
///
/// Invalid entries are dropped; each rejection is returned as a diagnostic
/// string so the caller can log it. A document that is not a JSON array
/// rejects everything.
pub fn parse_custom_links(raw: &str) -> (Vec<CustomLink>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    let doc: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            rejected.push(format!("custom links is not valid JSON: {e}"));
            return (accepted, rejected);
        }
    };

    let Some(items) = doc.as_array() else {
        rejected.push("custom links must be a JSON array".to_string());
        return (accepted, rejected);
    };

    for (i, item) in items.iter().enumerate() {
        match serde_json::from_value::<CustomLink>(item.clone()) {
            Ok(link) => accepted.push(link),
            Err(e) => rejected.push(format!("entry {i}: {e}")),
        }
    }

    (accepted, rejected)
}

/// A template bound to its ambient value (environment or custom literal).
#[derive(Debug, Clone)]
pub struct RegisteredLink {
    pub template: LinkTemplate,
    /// Value supplied by configuration. Per-request overrides still win.
    pub value: Option<String>,
}

impl RegisteredLink {
    /// Whether this entry can produce a link without a per-request override.
    fn has_source(&self) -> bool {
        self.template.url.is_some() || self.value.is_some()
    }
}

/// Immutable, ordered collection of registered links.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<RegisteredLink>,
}

impl Registry {
    /// Build the registry from built-in templates, environment-supplied
    /// values, and custom link definitions.
    ///
    /// Custom links are appended after the built-ins. When a custom entry
    /// omits `name`/`alias`, identifiers are auto-numbered across all
    /// same-type entries: environment-sourced ones first, then customs in
    /// order. The first occurrence keeps the bare title/alias, later ones
    /// get a numeric suffix starting at 2. The first custom for a type whose
    /// built-in holds no value fills that slot (an explicit `name`/`alias`
    /// renames it) so no identifier is registered twice.
    pub fn build(env_values: &HashMap<String, String>, customs: &[CustomLink]) -> Self {
        let builtins = builtin_templates();

        let mut entries: Vec<RegisteredLink> = builtins
            .iter()
            .map(|template| {
                let value = template
                    .required_var
                    .as_ref()
                    .and_then(|var| env_values.get(var))
                    .filter(|v| !v.is_empty())
                    .cloned();
                RegisteredLink {
                    template: template.clone(),
                    value,
                }
            })
            .collect();

        // Occurrence count per type of entries that can already produce a
        // link, used to auto-number the customs that follow.
        let mut occupied: HashMap<String, usize> = entries
            .iter()
            .map(|e| (e.template.title.clone(), usize::from(e.has_source())))
            .collect();

        for custom in customs {
            let key = custom.link_type.to_lowercase();
            let Some(base) = builtins.iter().find(|t| t.title == key) else {
                tracing::warn!(link_type = %custom.link_type, "Unknown custom link type, dropping");
                continue;
            };

            let n = occupied.get(&key).copied().unwrap_or(0) + 1;
            occupied.insert(key.clone(), n);

            let title = custom.name.clone().unwrap_or_else(|| numbered(&base.title, n));
            let alias = custom.alias.clone().unwrap_or_else(|| numbered(&base.alias, n));

            // First occurrence with an auto-derived title or alias fills the
            // unvalued built-in slot instead of duplicating its identifiers.
            // Explicit overrides still rename the slot.
            if n == 1 && (custom.name.is_none() || custom.alias.is_none()) {
                if let Some(slot) = entries
                    .iter_mut()
                    .find(|e| e.template.title == base.title && !e.has_source())
                {
                    slot.template.title = title.to_lowercase();
                    slot.template.alias = alias.to_lowercase();
                    slot.value = Some(custom.value.clone());
                    continue;
                }
            }

            let mut template = base.clone();
            template.title = title.to_lowercase();
            template.alias = alias.to_lowercase();
            entries.push(RegisteredLink {
                template,
                value: Some(custom.value.clone()),
            });
        }

        Self { entries }
    }

    /// All registered links, in display order.
    pub fn entries(&self) -> &[RegisteredLink] {
        &self.entries
    }

    /// Look up an entry by exact title or alias. Callers lowercase input.
    pub fn find(&self, key: &str) -> Option<&RegisteredLink> {
        self.entries
            .iter()
            .find(|e| e.template.title == key || e.template.alias == key)
    }
}

fn numbered(base: &str, n: usize) -> String {
    if n <= 1 {
        base.to_string()
    } else {
        format!("{base}{n}")
    }
}
