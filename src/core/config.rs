//! Application configuration.
//!
//! - `ApiConfig`: where the card API lives and how long to wait for it
//! - `AppConfig`: API settings plus reading and display parameters
//!
//! Everything has a default; the CLI overrides individual fields with the
//! `with_*` builder methods.

use serde::{Deserialize, Serialize};

/// Base URL of the public mock API serving the deck.
pub const DEFAULT_BASE_URL: &str = "https://6872278c76a5723aacd3cbb3.mockapi.io/api/v1/tarot";

/// HTTP settings for the card API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; `GET {base}/` lists cards, `GET {base}/{id}` fetches one.
    pub base_url: String,

    /// Request timeout in seconds (0 = transport default).
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// Set the base URL. Trailing slashes are dropped.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// URL listing every card.
    #[must_use]
    pub fn list_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// URL for a single card.
    #[must_use]
    pub fn card_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Card API settings.
    pub api: ApiConfig,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Maximum number of face-down cards shown while selecting.
    pub spread_limit: usize,

    /// Placeholder cards drawn while the deck is loading.
    pub skeleton_cards: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            seed: None,
            spread_limit: 15,
            skeleton_cards: 6,
        }
    }
}

impl AppConfig {
    /// Replace the API settings.
    #[must_use]
    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the spread limit.
    #[must_use]
    pub fn with_spread_limit(mut self, limit: usize) -> Self {
        self.spread_limit = limit;
        self
    }

    /// Set the number of loading placeholders.
    #[must_use]
    pub fn with_skeleton_cards(mut self, count: usize) -> Self {
        self.skeleton_cards = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.spread_limit, 15);
        assert_eq!(config.skeleton_cards, 6);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AppConfig::default()
            .with_api(ApiConfig::default().with_base_url("http://localhost:3000/tarot/"))
            .with_seed(123)
            .with_spread_limit(9);

        assert_eq!(config.api.base_url, "http://localhost:3000/tarot");
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.spread_limit, 9);
    }

    #[test]
    fn test_urls() {
        let api = ApiConfig::default().with_base_url("http://host/api/");
        assert_eq!(api.list_url(), "http://host/api/");
        assert_eq!(api.card_url("12"), "http://host/api/12");
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.seed, Some(9));
        assert_eq!(deserialized.api, config.api);
    }
}
