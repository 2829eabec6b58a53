use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// A single question/answer record shown on the help page.
///
/// `content` may contain embedded newlines to represent multi-step answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub title: &'static str,
    pub content: &'static str,
}

/// A single navigation entry with display label and target route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    /// Leading-slash route segment, e.g. `/inicio`.
    pub path: &'static str,
    /// In-page anchor used by the consumer for scrolling; absent unless needed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<&'static str>,
}

/// The closed set of recognized site configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    AppName,
    Email,
    Address,
    Copyright,
    FooterBrand,
    SupportEmail,
    FooterCopyright,
    GooglePlayUrl,
}

impl ConfigKey {
    /// All recognized keys, in the order they are documented.
    pub const ALL: &'static [ConfigKey] = &[
        Self::AppName,
        Self::Email,
        Self::Address,
        Self::Copyright,
        Self::FooterBrand,
        Self::SupportEmail,
        Self::FooterCopyright,
        Self::GooglePlayUrl,
    ];

    /// Returns the canonical name of the key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AppName => "APP_NAME",
            Self::Email => "EMAIL",
            Self::Address => "ADDRESS",
            Self::Copyright => "COPYRIGHT",
            Self::FooterBrand => "FOOTER_BRAND",
            Self::SupportEmail => "SUPPORT_EMAIL",
            Self::FooterCopyright => "FOOTER_COPYRIGHT",
            Self::GooglePlayUrl => "GOOGLE_PLAY_URL",
        }
    }

    /// Resolves a canonical key name.
    ///
    /// The recognized set is closed and known at compile time, so an unknown
    /// name is an error rather than a silent default.
    pub fn from_name(name: &str) -> AppResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.name() == name)
            .ok_or_else(|| AppError::NotFound {
                key: name.to_string(),
                available: Self::available_names(),
            })
    }

    /// Comma-separated list of recognized key names, for error messages.
    pub fn available_names() -> String {
        Self::ALL
            .iter()
            .map(|key| key.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Value of a site configuration key.
///
/// `EMAIL` is an ordered list of addresses; every other key is a single
/// text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue<'a> {
    Text(&'a str),
    List(&'a [&'a str]),
}

impl<'a> ConfigValue<'a> {
    /// Returns the text value, or `None` for list-valued keys.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns the list value, or `None` for text-valued keys.
    pub fn as_list(&self) -> Option<&'a [&'a str]> {
        match self {
            Self::Text(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigKey, ConfigValue};

    #[test]
    fn test_config_key_round_trips_canonical_names() {
        for &key in ConfigKey::ALL {
            let resolved = ConfigKey::from_name(key.name()).unwrap();
            assert_eq!(resolved, key);
        }
    }

    #[test]
    fn test_config_key_unknown_name_errors() {
        let err = ConfigKey::from_name("APP_VERSION").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("APP_VERSION"));
        assert!(msg.contains("APP_NAME"));
        assert!(msg.contains("GOOGLE_PLAY_URL"));
    }

    #[test]
    fn test_config_key_names_are_case_sensitive() {
        assert!(ConfigKey::from_name("app_name").is_err());
        assert!(ConfigKey::from_name("App_Name").is_err());
    }

    #[test]
    fn test_config_key_all_covers_eight_keys() {
        assert_eq!(ConfigKey::ALL.len(), 8);
    }

    #[test]
    fn test_config_value_accessors() {
        let text = ConfigValue::Text("SeguroCash");
        assert_eq!(text.as_text(), Some("SeguroCash"));
        assert!(text.as_list().is_none());

        let list = ConfigValue::List(&["a@example.com", "b@example.com"]);
        assert_eq!(list.as_list().unwrap().len(), 2);
        assert!(list.as_text().is_none());
    }
}
