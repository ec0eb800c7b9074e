//! Widget configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Built-in defaults
pub struct WidgetDefaults;

impl WidgetDefaults {
    /// Local development address of the question-answering backend
    pub const API_BASE_URL: &'static str = "http://127.0.0.1:5000";

    pub const CHAT_PATH: &'static str = "/chat";

    /// Deadline for a single question in milliseconds
    pub const REQUEST_TIMEOUT_MS: u64 = 30_000; // 30 seconds

    /// Largest delay browser timers accept (`i32::MAX` ms, about 24.8 days)
    pub const MAX_REQUEST_TIMEOUT_MS: u64 = 2_147_483_647;

    pub const TITLE: &'static str = "Tata Motors Assistant";

    pub const PLACEHOLDER: &'static str = "Type your question...";

    /// Seed bot message shown when the widget is created
    pub const WELCOME_MESSAGE: &'static str =
        "Welcome to Tata Motors. How can I assist you today?";

    /// Shown in place of a reply whenever a request fails
    pub const FAILURE_MESSAGE: &'static str =
        "Sorry, I am having trouble connecting. Please try again later.";
}

/// Runtime configuration for the chat widget
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub api_base_url: String,
    pub chat_path: String,
    /// Request deadline in milliseconds; 0 waits indefinitely
    pub request_timeout_ms: u64,
    pub title: String,
    pub placeholder: String,
    pub welcome_message: String,
    pub failure_message: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: WidgetDefaults::API_BASE_URL.to_string(),
            chat_path: WidgetDefaults::CHAT_PATH.to_string(),
            request_timeout_ms: WidgetDefaults::REQUEST_TIMEOUT_MS,
            title: WidgetDefaults::TITLE.to_string(),
            placeholder: WidgetDefaults::PLACEHOLDER.to_string(),
            welcome_message: WidgetDefaults::WELCOME_MESSAGE.to_string(),
            failure_message: WidgetDefaults::FAILURE_MESSAGE.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration document. Missing fields fall
    /// back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.chat_path.starts_with('/') {
            return Err(ConfigError::InvalidChatPath(self.chat_path.clone()));
        }
        if self.request_timeout_ms > WidgetDefaults::MAX_REQUEST_TIMEOUT_MS {
            return Err(ConfigError::TimeoutTooLarge {
                value: self.request_timeout_ms,
                max: WidgetDefaults::MAX_REQUEST_TIMEOUT_MS,
            });
        }
        self.chat_url().map(|_| ())
    }

    /// Full URL of the chat endpoint
    pub fn chat_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason,
        };

        if self.api_base_url.trim().is_empty() {
            return Err(invalid("must not be empty".to_string()));
        }

        let base = Url::parse(self.api_base_url.trim_end_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
        }

        let joined = format!("{}{}", base.as_str().trim_end_matches('/'), self.chat_path);
        Url::parse(&joined).map_err(|e| invalid(e.to_string()))
    }

    /// Request deadline, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then_some(Duration::from_millis(self.request_timeout_ms))
    }

    /// Deadline as a browser timer delay, clamped to what `setTimeout`
    /// accepts. `None` when disabled.
    pub fn timer_delay_ms(&self) -> Option<u32> {
        (self.request_timeout_ms > 0).then(|| {
            let clamped = self
                .request_timeout_ms
                .min(WidgetDefaults::MAX_REQUEST_TIMEOUT_MS);
            u32::try_from(clamped).unwrap_or(i32::MAX.unsigned_abs())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WidgetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chat_url().unwrap().as_str(), "http://127.0.0.1:5000/chat");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            WidgetConfig::from_json(r#"{"api_base_url": "https://bot.example.com/api/"}"#).unwrap();
        assert_eq!(config.chat_url().unwrap().as_str(), "https://bot.example.com/api/chat");
        assert_eq!(config.welcome_message, WidgetDefaults::WELCOME_MESSAGE);
        assert_eq!(config.failure_message, WidgetDefaults::FAILURE_MESSAGE);
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let config = WidgetConfig::from_json(r#"{"request_timeout_ms": 0}"#).unwrap();
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.timer_delay_ms(), None);
    }

    #[test]
    fn test_timer_delay_stays_within_browser_range() {
        let config = WidgetConfig::default();
        assert_eq!(config.timer_delay_ms(), Some(30_000));

        let config = WidgetConfig {
            request_timeout_ms: 3_000_000_000,
            ..WidgetConfig::default()
        };
        assert_eq!(config.timer_delay_ms(), Some(2_147_483_647));
        assert!(i32::try_from(config.timer_delay_ms().unwrap()).is_ok());
    }

    #[test]
    fn test_rejects_timeout_beyond_timer_range() {
        let result = WidgetConfig::from_json(r#"{"request_timeout_ms": 2147483648}"#);
        assert!(matches!(
            result,
            Err(ConfigError::TimeoutTooLarge { value: 2_147_483_648, .. })
        ));

        let config = WidgetConfig::from_json(r#"{"request_timeout_ms": 2147483647}"#).unwrap();
        assert_eq!(config.timer_delay_ms(), Some(2_147_483_647));
    }

    #[test]
    fn test_rejects_bad_urls() {
        let result = WidgetConfig::from_json(r#"{"api_base_url": ""}"#);
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));

        let result = WidgetConfig::from_json(r#"{"api_base_url": "ftp://example.com"}"#);
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));

        let result = WidgetConfig::from_json(r#"{"chat_path": "chat"}"#);
        assert!(matches!(result, Err(ConfigError::InvalidChatPath(_))));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let result = WidgetConfig::from_json("{ nope");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
