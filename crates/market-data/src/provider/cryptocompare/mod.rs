//! CryptoCompare market data provider implementation.
//!
//! This module provides:
//! - USD spot prices via `/data/price?fsym=<SYMBOL>&tsyms=USD`
//! - Latest news via `/data/v2/news/?lang=EN`
//!
//! CryptoCompare reports most failures as an HTTP 200 with an error
//! envelope, so every body is checked for one before it is parsed.
//! API documentation: https://min-api.cryptocompare.com/documentation

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{Article, ProviderSymbol};
use crate::provider::{NewsProvider, PriceProvider};

use models::{ErrorEnvelope, NewsResponse, PriceResponse};

/// Default price endpoint
pub const DEFAULT_PRICE_URL: &str = "https://min-api.cryptocompare.com/data/price";

/// Default news endpoint
pub const DEFAULT_NEWS_URL: &str = "https://min-api.cryptocompare.com/data/v2/news/";

/// Quote currency requested from the price endpoint
pub const QUOTE_CURRENCY: &str = "USD";

const PROVIDER_ID: &str = "CRYPTOCOMPARE";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Issue a GET and return the body of a successful response.
async fn fetch(
    client: &Client,
    url: &str,
    params: &[(&str, &str)],
    api_key: Option<&str>,
) -> Result<String, MarketDataError> {
    let mut request = client.get(url).query(params);
    if let Some(key) = api_key {
        request = request.header("authorization", format!("Apikey {}", key));
    }

    debug!("CryptoCompare request: {} with {} params", url, params.len());

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(e)
        }
    })?;

    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(MarketDataError::RateLimited {
            provider: PROVIDER_ID.to_string(),
        });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(MarketDataError::provider(
            PROVIDER_ID,
            format!("HTTP {} - {}", status, body),
        ));
    }

    response.text().await.map_err(|e| {
        MarketDataError::provider(PROVIDER_ID, format!("Failed to read response: {}", e))
    })
}

/// Reject CryptoCompare's in-band error envelope.
fn check_envelope(body: &str) -> Result<(), MarketDataError> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if envelope.is_error() {
            let message = envelope
                .message
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(MarketDataError::provider(PROVIDER_ID, message));
        }
    }
    Ok(())
}

/// Parse a `/data/price` body into a USD price.
pub(crate) fn parse_price_response(body: &str, symbol: &str) -> Result<Decimal, MarketDataError> {
    check_envelope(body)?;

    let response: PriceResponse = serde_json::from_str(body).map_err(|e| {
        MarketDataError::malformed(PROVIDER_ID, format!("Failed to parse price response: {}", e))
    })?;

    let usd = response.usd.ok_or_else(|| MarketDataError::MissingPrice {
        provider: PROVIDER_ID.to_string(),
        symbol: symbol.to_string(),
    })?;

    if usd.is_sign_negative() && usd != 0.0 {
        return Err(MarketDataError::ValidationFailed {
            message: format!("Negative price for {}: {}", symbol, usd),
        });
    }

    Decimal::try_from(usd).map_err(|_| MarketDataError::ValidationFailed {
        message: format!("Invalid price for {}: {}", symbol, usd),
    })
}

/// Parse a `/data/v2/news` body into articles, keeping upstream order.
pub(crate) fn parse_news_response(body: &str) -> Result<Vec<Article>, MarketDataError> {
    check_envelope(body)?;

    let response: NewsResponse = serde_json::from_str(body).map_err(|e| {
        MarketDataError::malformed(PROVIDER_ID, format!("Failed to parse news response: {}", e))
    })?;

    Ok(response
        .data
        .into_iter()
        .filter_map(|item| {
            let published_on = Utc.timestamp_opt(item.published_on, 0).single()?;
            Some(Article {
                title: item.title,
                url: item.url,
                published_on,
            })
        })
        .collect())
}

// ============================================================================
// CryptoCompareProvider
// ============================================================================

/// CryptoCompare spot price provider.
///
/// # Example
///
/// ```ignore
/// use coinboard_market_data::CryptoCompareProvider;
///
/// let provider = CryptoCompareProvider::new().with_api_key("your_api_key".to_string());
/// ```
pub struct CryptoCompareProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CryptoCompareProvider {
    /// Create a provider pointed at the public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_PRICE_URL.to_string(), REQUEST_TIMEOUT)
    }

    /// Create a provider for a custom endpoint and request timeout.
    pub fn with_base_url(base_url: String, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url,
            api_key: None,
        }
    }

    /// Send an API key with every request.
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for CryptoCompareProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for CryptoCompareProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_price(&self, symbol: &ProviderSymbol) -> Result<Decimal, MarketDataError> {
        let params = [("fsym", &**symbol), ("tsyms", QUOTE_CURRENCY)];
        let body = fetch(
            &self.client,
            &self.base_url,
            &params,
            self.api_key.as_deref(),
        )
        .await?;
        parse_price_response(&body, symbol)
    }
}

// ============================================================================
// CryptoCompareNewsProvider
// ============================================================================

/// CryptoCompare news feed.
pub struct CryptoCompareNewsProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CryptoCompareNewsProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_NEWS_URL.to_string(), REQUEST_TIMEOUT)
    }

    pub fn with_base_url(base_url: String, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url,
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }
}

impl Default for CryptoCompareNewsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsProvider for CryptoCompareNewsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_articles(&self) -> Result<Vec<Article>, MarketDataError> {
        let body = fetch(
            &self.client,
            &self.base_url,
            &[("lang", "EN")],
            self.api_key.as_deref(),
        )
        .await?;
        parse_news_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_provider_id() {
        let provider = CryptoCompareProvider::new();
        assert_eq!(provider.id(), "CRYPTOCOMPARE");
        assert_eq!(provider.base_url(), DEFAULT_PRICE_URL);
    }

    #[test]
    fn test_price_response_parsing() {
        let price = parse_price_response(r#"{"USD":65000.5}"#, "BTC").unwrap();
        assert_eq!(price, dec!(65000.5));
    }

    #[test]
    fn test_price_response_zero_is_a_price() {
        let price = parse_price_response(r#"{"USD":0}"#, "USDC").unwrap();
        assert_eq!(price, Decimal::ZERO);
    }

    #[test]
    fn test_price_response_missing_usd() {
        let err = parse_price_response(r#"{"EUR":3000.1}"#, "ETH").unwrap_err();
        assert!(matches!(
            err,
            MarketDataError::MissingPrice { ref symbol, .. } if symbol == "ETH"
        ));
    }

    #[test]
    fn test_price_response_error_envelope() {
        let body = r#"{"Response":"Error","Message":"fsym param seems to be missing.","HasWarning":false,"Type":2,"Data":{}}"#;
        let err = parse_price_response(body, "BTC").unwrap_err();
        match err {
            MarketDataError::ProviderError { provider, message } => {
                assert_eq!(provider, "CRYPTOCOMPARE");
                assert!(message.contains("fsym"));
            }
            other => panic!("Expected ProviderError, got {:?}", other),
        }
    }

    #[test]
    fn test_price_response_malformed() {
        let err = parse_price_response("<html>bad gateway</html>", "BTC").unwrap_err();
        assert!(matches!(err, MarketDataError::MalformedPayload { .. }));

        let err = parse_price_response(r#"{"USD":"lots"}"#, "BTC").unwrap_err();
        assert!(matches!(err, MarketDataError::MalformedPayload { .. }));
    }

    #[test]
    fn test_price_response_negative() {
        let err = parse_price_response(r#"{"USD":-1}"#, "BTC").unwrap_err();
        assert!(matches!(err, MarketDataError::ValidationFailed { .. }));
    }

    #[test]
    fn test_news_response_parsing() {
        let body = r#"{
            "Type": 100,
            "Message": "News list successfully returned",
            "Data": [
                {"id": "1", "title": "Bitcoin rallies", "url": "https://example.com/a", "published_on": 1714572300, "source": "x"},
                {"id": "2", "title": "Ether upgrade", "url": "https://example.com/b", "published_on": 1714568700}
            ]
        }"#;

        let articles = parse_news_response(body).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Bitcoin rallies");
        assert_eq!(articles[0].url, "https://example.com/a");
        assert_eq!(
            articles[0].published_on,
            Utc.with_ymd_and_hms(2024, 5, 1, 14, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_news_response_error_envelope() {
        let body = r#"{"Response":"Error","Message":"rate limit","Data":{}}"#;
        assert!(parse_news_response(body).is_err());
    }

    #[test]
    fn test_news_response_without_data() {
        let articles = parse_news_response(r#"{"Type":100,"Message":"ok"}"#).unwrap();
        assert!(articles.is_empty());
    }
}
