//! Client construction parameters.

use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Fixed per-client configuration.
///
/// `token` lets a client start already authenticated, e.g. from a credential
/// persisted by an earlier login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub disable_pagination: bool,
    pub language: String,
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            disable_pagination: true,
            language: DEFAULT_LANGUAGE.to_string(),
            token: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Read the configuration from `TAIGA_URL`, `TAIGA_DISABLE_PAGINATION`,
    /// `TAIGA_LANGUAGE` and `TAIGA_TOKEN`. Unset or empty variables keep
    /// their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            base_url: var("TAIGA_URL").unwrap_or(defaults.base_url),
            disable_pagination: var("TAIGA_DISABLE_PAGINATION")
                .map(|value| parse_flag(&value))
                .unwrap_or(defaults.disable_pagination),
            language: var("TAIGA_LANGUAGE").unwrap_or(defaults.language),
            token: var("TAIGA_TOKEN"),
        }
    }

    pub fn with_pagination_disabled(mut self, disabled: bool) -> Self {
        self.disable_pagination = disabled;
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
