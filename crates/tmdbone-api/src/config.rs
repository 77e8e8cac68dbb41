//! Serializable client settings.

use serde::{Deserialize, Serialize};

/// Client settings as stored in a config file.
///
/// All fields are optional; unset values fall back to the builder defaults.
///
/// ```toml
/// api_keys = ["key-a", "key-b"]
/// language = "ja-JP"
/// max_retries = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// v3 API keys, tried in order on HTTP 401.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub api_keys: Vec<String>,
    /// v4 read access token, tried after the API keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// Default `language` parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Base URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Minimum interval between requests, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_interval_ms: Option<u64>,
    /// Retry budget for HTTP 429 and transient failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    /// Base backoff between retries, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_backoff_ms: Option<u64>,
    /// Per-request timeout, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Returns `true` if at least one credential is configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_keys.iter().any(|k| !k.is_empty())
            || self.bearer_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Copy with secrets masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mask = |s: &String| {
            let visible: String = s.chars().take(4).collect();
            format!("{visible}***")
        };
        Self {
            api_keys: self.api_keys.iter().map(mask).collect(),
            bearer_token: self.bearer_token.as_ref().map(mask),
            ..self.clone()
        }
    }
}
