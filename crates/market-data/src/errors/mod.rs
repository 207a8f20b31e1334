//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers every way a single remote lookup can fail.
//! Callers treat any of them as a failure of the whole fetch cycle.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol is not part of the tracked set.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success status or an error payload.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The response body could not be parsed.
    #[error("Malformed payload from {provider}: {message}")]
    MalformedPayload {
        /// The provider that sent the body
        provider: String,
        /// Parser error
        message: String,
    },

    /// The response parsed but carried no USD price.
    #[error("Missing USD price for {symbol} from {provider}")]
    MissingPrice {
        /// The provider that sent the body
        provider: String,
        /// Upstream symbol that was queried
        symbol: String,
    },

    /// Data validation failed.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the failure is likely to clear up on its own.
    ///
    /// Nothing in this crate retries; the flag only drives log severity
    /// and lets a scheduler decide on its own policy.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::Timeout { .. } | Self::Network(_)
        )
    }

    pub(crate) fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed(provider: &str, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_is_transient() {
        let error = MarketDataError::RateLimited {
            provider: "CRYPTOCOMPARE".to_string(),
        };
        assert!(error.is_transient());
    }

    #[test]
    fn test_timeout_is_transient() {
        let error = MarketDataError::Timeout {
            provider: "CRYPTOCOMPARE".to_string(),
        };
        assert!(error.is_transient());
    }

    #[test]
    fn test_payload_errors_are_not_transient() {
        assert!(!MarketDataError::malformed("CRYPTOCOMPARE", "expected value").is_transient());
        assert!(!MarketDataError::MissingPrice {
            provider: "CRYPTOCOMPARE".to_string(),
            symbol: "BTC".to_string(),
        }
        .is_transient());
        assert!(!MarketDataError::SymbolNotFound("DOGE".to_string()).is_transient());
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("DOGE".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: DOGE");

        let error = MarketDataError::provider("CRYPTOCOMPARE", "HTTP 500");
        assert_eq!(
            format!("{}", error),
            "Provider error: CRYPTOCOMPARE - HTTP 500"
        );

        let error = MarketDataError::MissingPrice {
            provider: "CRYPTOCOMPARE".to_string(),
            symbol: "ETH".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Missing USD price for ETH from CRYPTOCOMPARE"
        );
    }
}
