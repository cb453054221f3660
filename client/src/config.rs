//! # Configuration
//!
//! Environment-driven configuration for the two external services and the
//! durable store location.

use std::env;
use std::path::PathBuf;

/// Reference currency used for all market-data queries (USD).
pub const REFERENCE_CURRENCY_UUID: &str = "yhjMzLPhuIDl";

/// Time period used for change/history queries.
pub const TIME_PERIOD: &str = "24h";

/// Page size for the coin list endpoint.
pub const COIN_LIMIT: u32 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the account service (auth, profiles, storage).
    pub account_url: String,
    /// Public API key sent with every account service request.
    pub account_key: String,
    /// Base URL of the market-data provider.
    pub market_url: String,
    /// API key for the market-data provider.
    pub market_key: String,
    /// Host header value required by the market-data provider.
    pub market_host: String,
    /// Directory holding the persisted session store.
    pub store_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let account_url = env::var("ACCOUNT_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:54321".to_string());

        let account_key = env::var("ACCOUNT_KEY").unwrap_or_default();

        let market_url = env::var("MARKET_URL")
            .unwrap_or_else(|_| "https://coinranking1.p.rapidapi.com".to_string());

        let market_key = env::var("MARKET_KEY").unwrap_or_default();

        let market_host = env::var("MARKET_HOST")
            .unwrap_or_else(|_| "coinranking1.p.rapidapi.com".to_string());

        let store_dir = env::var("STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Ok(Self {
            account_url,
            account_key,
            market_url,
            market_key,
            market_host,
            store_dir,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.account_url.starts_with("http") {
            return Err("ACCOUNT_URL must be an http(s) URL".to_string());
        }

        if !self.market_url.starts_with("http") {
            return Err("MARKET_URL must be an http(s) URL".to_string());
        }

        if self.account_key.is_empty() {
            return Err("ACCOUNT_KEY must be set in environment".to_string());
        }

        if self.market_key.is_empty() {
            return Err("MARKET_KEY must be set in environment".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Config {
        Config {
            account_url: "http://127.0.0.1:54321".to_string(),
            account_key: "anon-key".to_string(),
            market_url: "https://coinranking1.p.rapidapi.com".to_string(),
            market_key: "rapid-key".to_string(),
            market_host: "coinranking1.p.rapidapi.com".to_string(),
            store_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_keys() {
        let mut config = filled();
        config.account_key = String::new();
        assert!(config.validate().is_err());

        let mut config = filled();
        config.market_key = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_urls() {
        let mut config = filled();
        config.account_url = "ftp://nope".to_string();
        assert!(config.validate().is_err());
    }
}
