use serde::{Deserialize, Serialize};

/// Response envelope used by every market-data endpoint.
///
/// The provider wraps all payloads in `{"status": "success", "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
}

/// A single coin as returned by the list and detail endpoints.
///
/// The provider serializes numeric fields as JSON strings (and omits them
/// for delisted coins), so they stay `Option<String>` here with parse
/// helpers for display code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub uuid: String,
    pub symbol: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// 24h change in percent, signed, e.g. "-2.52".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sparkline: Vec<Option<String>>,
}

impl Coin {
    /// Current price as a float, if present and parseable.
    pub fn price_value(&self) -> Option<f64> {
        self.price.as_deref().and_then(|p| p.parse().ok())
    }

    /// 24h change in percent as a float, if present and parseable.
    pub fn change_value(&self) -> Option<f64> {
        self.change.as_deref().and_then(|c| c.parse().ok())
    }
}

/// Payload of the list-all-coins endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinList {
    pub coins: Vec<Coin>,
}

/// Payload of the get-coin-by-id endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinDetail {
    pub coin: Coin,
}

/// One sample of a coin's price history. `price` may be null for gaps in
/// the provider's data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub price: Option<String>,
    pub timestamp: i64,
}

/// Payload of the price-history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    pub history: Vec<PricePoint>,
}

/// A coin as returned by the search-suggestions endpoint (reduced shape).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub uuid: String,
    pub symbol: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Payload of the search-suggestions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub coins: Vec<SearchHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_list_parses_provider_shape() {
        let body = r#"{
            "status": "success",
            "data": {
                "coins": [
                    {
                        "uuid": "Qwsogvtv82FCd",
                        "symbol": "BTC",
                        "name": "Bitcoin",
                        "iconUrl": "https://cdn.example/btc.svg",
                        "price": "63244.62",
                        "change": "-2.52",
                        "marketCap": "1245000000000",
                        "rank": 1,
                        "sparkline": ["63000.1", null, "63244.62"]
                    }
                ]
            }
        }"#;

        let envelope: Envelope<CoinList> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status, "success");
        let coin = &envelope.data.coins[0];
        assert_eq!(coin.symbol, "BTC");
        assert_eq!(coin.rank, Some(1));
        assert_eq!(coin.price_value(), Some(63244.62));
        assert_eq!(coin.change_value(), Some(-2.52));
        assert_eq!(coin.sparkline.len(), 3);
        assert!(coin.sparkline[1].is_none());
    }

    #[test]
    fn history_tolerates_null_prices() {
        let body = r#"{
            "status": "success",
            "data": {
                "change": "1.2",
                "history": [
                    {"price": "100.5", "timestamp": 1700000000},
                    {"price": null, "timestamp": 1700000060}
                ]
            }
        }"#;

        let envelope: Envelope<PriceHistory> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.history.len(), 2);
        assert!(envelope.data.history[1].price.is_none());
    }

    #[test]
    fn coin_without_price_parses() {
        let body = r#"{"uuid": "x", "symbol": "DEAD", "name": "Delisted"}"#;
        let coin: Coin = serde_json::from_str(body).unwrap();
        assert!(coin.price_value().is_none());
        assert!(coin.sparkline.is_empty());
    }
}
