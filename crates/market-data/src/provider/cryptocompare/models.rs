//! CryptoCompare wire formats.

use serde::Deserialize;

/// Error envelope shared by every CryptoCompare endpoint.
///
/// Failed requests still answer with HTTP 200 and a body of the form
/// `{"Response":"Error","Message":"..."}`.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    pub fn is_error(&self) -> bool {
        self.response
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("error"))
    }
}

/// Response from `/data/price?fsym=..&tsyms=USD`
#[derive(Debug, Deserialize)]
pub(super) struct PriceResponse {
    #[serde(rename = "USD")]
    pub usd: Option<f64>,
}

/// Response from `/data/v2/news/?lang=EN`
#[derive(Debug, Deserialize)]
pub(super) struct NewsResponse {
    #[serde(rename = "Data", default)]
    pub data: Vec<NewsItem>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NewsItem {
    pub title: String,
    pub url: String,
    /// Unix seconds
    pub published_on: i64,
}
