//! Share link configuration.

use serde::{Deserialize, Serialize};

/// Share link assembly configuration.
///
/// The length budget exists because common link consumers (browsers,
/// email clients, chat apps) truncate or reject URLs past roughly 2000
/// characters. URLs over the budget are never shared directly; the flow
/// switches to a plain-text fallback instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Base URL the token is appended to (origin + path, no query).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Query parameter name carrying the encoded payload.
    #[serde(default = "default_param_name")]
    pub param_name: String,
    /// Maximum total URL length before the fallback share path is used.
    #[serde(default = "default_max_url_length")]
    pub max_url_length: usize,
    /// Message body used on the fallback share path.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            param_name: default_param_name(),
            max_url_length: default_max_url_length(),
            fallback_message: default_fallback_message(),
        }
    }
}

fn default_base_url() -> String {
    "https://cardlink.app".to_string()
}

fn default_param_name() -> String {
    "card".to_string()
}

fn default_max_url_length() -> usize {
    2000
}

fn default_fallback_message() -> String {
    "Check out my digital business card! Create yours too:".to_string()
}
