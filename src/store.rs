use crate::constants::{
    ADDRESS, APP_NAME_DEFAULT, APP_NAME_ENV, COPYRIGHT, EMAIL, FOOTER_BRAND, FOOTER_COPYRIGHT,
    GOOGLE_PLAY_URL, SUPPORT_EMAIL,
};
use crate::content::{FAQ_LIST, MENU_LIST};
use crate::errors::{AppError, AppResult};
use crate::models::{ConfigKey, ConfigValue, FaqItem, MenuItem};
use std::env;
use std::sync::OnceLock;
use tracing::info;
use url::Url;

/// Read-only site content, resolved once at startup.
///
/// Everything except the display name is static data; the display name is the
/// one value that can be replaced through the environment, so it is resolved
/// when the store is built and held for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    app_name: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            app_name: APP_NAME_DEFAULT.to_string(),
        }
    }
}

impl SiteContent {
    /// Builds the store, reading the display-name override from the environment.
    ///
    /// A set, non-empty `APP_NAME_OVERRIDE` replaces the default display name;
    /// anything else falls back to the default. This step never fails.
    pub fn from_env() -> Self {
        let override_value = env::var(APP_NAME_ENV).ok();
        Self {
            app_name: resolve_app_name(override_value.as_deref()),
        }
    }

    /// Returns the resolved application display name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the FAQ entries in authoring order.
    pub fn faq_list(&self) -> &'static [FaqItem] {
        FAQ_LIST
    }

    /// Returns the navigation menu entries in authoring order.
    pub fn menu_list(&self) -> &'static [MenuItem] {
        MENU_LIST
    }

    /// Returns the value of a recognized configuration key.
    pub fn value(&self, key: ConfigKey) -> ConfigValue<'_> {
        match key {
            ConfigKey::AppName => ConfigValue::Text(self.app_name()),
            ConfigKey::Email => ConfigValue::List(EMAIL),
            ConfigKey::Address => ConfigValue::Text(ADDRESS),
            ConfigKey::Copyright => ConfigValue::Text(COPYRIGHT),
            ConfigKey::FooterBrand => ConfigValue::Text(FOOTER_BRAND),
            ConfigKey::SupportEmail => ConfigValue::Text(SUPPORT_EMAIL),
            ConfigKey::FooterCopyright => ConfigValue::Text(FOOTER_COPYRIGHT),
            ConfigKey::GooglePlayUrl => ConfigValue::Text(GOOGLE_PLAY_URL),
        }
    }

    /// Looks up a configuration value by its canonical name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `name` is not among the recognized keys.
    pub fn config_value(&self, name: &str) -> AppResult<ConfigValue<'_>> {
        let key = ConfigKey::from_name(name)?;
        Ok(self.value(key))
    }

    /// Checks the documented content invariants.
    ///
    /// Initialization never runs this and never fails; call it from a test
    /// suite or a build-time content check.
    pub fn validate(&self) -> AppResult<()> {
        for (index, item) in self.faq_list().iter().enumerate() {
            if item.title.is_empty() {
                return Err(AppError::InvalidContent(format!(
                    "FAQ entry {index} has an empty title"
                )));
            }
            if item.content.is_empty() {
                return Err(AppError::InvalidContent(format!(
                    "FAQ entry {index} has an empty content"
                )));
            }
        }

        let menu = self.menu_list();
        for item in menu {
            if item.name.is_empty() {
                return Err(AppError::InvalidContent(format!(
                    "Menu entry '{}' has an empty name",
                    item.path
                )));
            }
            if !item.path.starts_with('/') {
                return Err(AppError::InvalidContent(format!(
                    "Menu path '{}' does not start with '/'",
                    item.path
                )));
            }
        }
        for (index, item) in menu.iter().enumerate() {
            if menu[..index].iter().any(|other| other.path == item.path) {
                return Err(AppError::InvalidContent(format!(
                    "Duplicate menu path '{}'",
                    item.path
                )));
            }
        }

        Url::parse(GOOGLE_PLAY_URL)?;

        Ok(())
    }
}

/// Resolves the display name from an optional override value.
///
/// Kept separate from [`SiteContent::from_env`] so the rule is testable
/// without touching the process environment.
pub fn resolve_app_name(override_value: Option<&str>) -> String {
    match override_value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => APP_NAME_DEFAULT.to_string(),
    }
}

/// Returns the process-wide store, building it on first access.
///
/// The environment override is read exactly once; afterwards the content is
/// immutable, so concurrent readers need no locking.
pub fn site_content() -> &'static SiteContent {
    static SITE_CONTENT: OnceLock<SiteContent> = OnceLock::new();
    SITE_CONTENT.get_or_init(|| {
        let content = SiteContent::from_env();
        info!(
            app_name = content.app_name(),
            overridden = content.app_name() != APP_NAME_DEFAULT,
            faq_entries = content.faq_list().len(),
            menu_entries = content.menu_list().len(),
            "Site content initialized"
        );
        content
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_uses_default_app_name() {
        let content = SiteContent::default();
        assert_eq!(content.app_name(), "Optivolve Digital");
    }

    #[test]
    fn resolve_app_name_prefers_non_empty_override() {
        assert_eq!(resolve_app_name(Some("GiroFácil")), "GiroFácil");
    }

    #[test]
    fn resolve_app_name_empty_override_falls_back() {
        assert_eq!(resolve_app_name(Some("")), APP_NAME_DEFAULT);
    }

    #[test]
    fn resolve_app_name_missing_override_falls_back() {
        assert_eq!(resolve_app_name(None), APP_NAME_DEFAULT);
    }

    #[test]
    fn resolve_app_name_keeps_whitespace_override() {
        // Only the empty string falls back; whitespace is kept as authored.
        assert_eq!(resolve_app_name(Some("  ")), "  ");
    }

    #[test]
    fn value_returns_list_for_email_and_text_otherwise() {
        let content = SiteContent::default();
        assert!(content.value(ConfigKey::Email).as_list().is_some());
        for &key in ConfigKey::ALL {
            if key != ConfigKey::Email {
                assert!(content.value(key).as_text().is_some(), "{}", key.name());
            }
        }
    }

    #[test]
    fn config_value_unknown_key_errors() {
        let content = SiteContent::default();
        let err = content.config_value("FOOTER").unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn authored_content_passes_validation() {
        SiteContent::default().validate().unwrap();
    }

    #[test]
    fn site_content_returns_same_instance() {
        let first = site_content();
        let second = site_content();
        assert!(std::ptr::eq(first, second));
    }
}
