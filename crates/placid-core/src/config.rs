//! Page hook configuration.
//!
//! Selectors for the elements the runtime binds to, plus the dark-mode class,
//! the hidden-card class and the theme storage key, so a page with different
//! markup can reuse the behaviour. Defaults match the stock Placid templates.
//!
//! State attributes (`data-open`, `aria-expanded`, `aria-invalid`,
//! `data-category`), the field error class and the feedback classes are
//! fixed; they live next to the logic in `navigation`, `search` and `contact`.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Selectors and class names the interaction runtime binds to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Theme toggle settings.
    pub theme: ThemeHooks,

    /// Navigation toggle settings.
    pub navigation: NavigationHooks,

    /// Category search settings.
    pub search: SearchHooks,

    /// Contact form settings.
    pub contact: ContactHooks,
}

/// Theme toggle hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeHooks {
    /// Selector for the toggle button.
    pub toggle: String,

    /// Selector, relative to the toggle, for the label element.
    pub icon: String,

    /// Class set on `<body>` while the dark theme is active.
    pub dark_class: String,

    /// Local storage key holding `"dark"` or `"light"`.
    pub storage_key: String,
}

/// Navigation toggle hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationHooks {
    /// Selector for the menu button.
    pub menu_toggle: String,

    /// Selector for the collapsible navigation panel.
    pub panel: String,
}

/// Category search hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHooks {
    /// Selector for forms whose submission is suppressed.
    pub form: String,

    /// Selector for the container holding the cards.
    pub filter_group: String,

    /// Selector for the query input.
    pub input: String,

    /// Selector for the optional result count region.
    pub feedback: String,

    /// Selector, relative to the container, for a category card.
    pub card: String,

    /// Class toggled on cards that do not match.
    pub hidden_class: String,
}

/// Contact form hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactHooks {
    /// Selector for the contact form.
    pub form: String,

    /// Selector, relative to the form, for the optional feedback region.
    pub feedback: String,
}

impl Default for ThemeHooks {
    fn default() -> Self {
        Self {
            toggle: "#theme-toggle".to_string(),
            icon: ".theme-toggle__icon".to_string(),
            dark_class: crate::theme::DARK_CLASS.to_string(),
            storage_key: crate::theme::THEME_STORAGE_KEY.to_string(),
        }
    }
}

impl Default for NavigationHooks {
    fn default() -> Self {
        Self {
            menu_toggle: ".menu-toggle".to_string(),
            panel: "#primary-navigation".to_string(),
        }
    }
}

impl Default for SearchHooks {
    fn default() -> Self {
        Self {
            form: ".search-form".to_string(),
            filter_group: "[data-filter-group]".to_string(),
            input: "#search-input".to_string(),
            feedback: ".search-feedback".to_string(),
            card: ".category-card".to_string(),
            hidden_class: crate::search::HIDDEN_CLASS.to_string(),
        }
    }
}

impl Default for ContactHooks {
    fn default() -> Self {
        Self {
            form: "[data-contact-form]".to_string(),
            feedback: ".form-feedback".to_string(),
        }
    }
}

impl HookConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from TOML. Missing fields take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations with empty selectors, classes or keys.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("theme.toggle", &self.theme.toggle),
            ("theme.icon", &self.theme.icon),
            ("theme.dark_class", &self.theme.dark_class),
            ("theme.storage_key", &self.theme.storage_key),
            ("navigation.menu_toggle", &self.navigation.menu_toggle),
            ("navigation.panel", &self.navigation.panel),
            ("search.form", &self.search.form),
            ("search.filter_group", &self.search.filter_group),
            ("search.input", &self.search.input),
            ("search.feedback", &self.search.feedback),
            ("search.card", &self.search.card),
            ("search.hidden_class", &self.search.hidden_class),
            ("contact.form", &self.contact.form),
            ("contact.feedback", &self.contact.feedback),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CoreError::config(format!("`{name}` must not be empty")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hooks_match_templates() {
        let config = HookConfig::default();
        assert_eq!(config.theme.toggle, "#theme-toggle");
        assert_eq!(config.theme.storage_key, "placid-theme");
        assert_eq!(config.theme.dark_class, "dark-mode");
        assert_eq!(config.navigation.panel, "#primary-navigation");
        assert_eq!(config.search.hidden_class, "is-hidden");
        assert_eq!(config.contact.form, "[data-contact-form]");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = HookConfig::from_json(r#"{"theme": {"storage_key": "site-theme"}}"#).unwrap();
        assert_eq!(config.theme.storage_key, "site-theme");
        assert_eq!(config.theme.toggle, "#theme-toggle");
        assert_eq!(config.search, SearchHooks::default());
    }

    #[test]
    fn test_toml_config() {
        let toml_content = r##"
[navigation]
menu_toggle = "#burger"

[contact]
feedback = ".notice"
"##;
        let config = HookConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.navigation.menu_toggle, "#burger");
        assert_eq!(config.navigation.panel, "#primary-navigation");
        assert_eq!(config.contact.feedback, ".notice");
    }

    #[test]
    fn test_empty_selector_rejected() {
        let err = HookConfig::from_json(r#"{"search": {"input": "  "}}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
        assert!(err.to_string().contains("search.input"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = HookConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }
}
