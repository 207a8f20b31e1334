//! Engine event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coinboard_market_data::AssetSymbol;

/// Events emitted by the engine after each refresh cycle.
///
/// A failed refresh never changes state, so it is only ever visible here
/// and in the logs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A batch was installed as the new portfolio snapshot.
    RefreshSucceeded {
        symbols: Vec<AssetSymbol>,
        observed_at: DateTime<Utc>,
    },

    /// A fetch cycle failed; the previous snapshot was kept.
    RefreshFailed {
        message: String,
        /// Rate limits, timeouts and network errors
        transient: bool,
    },
}

impl EngineEvent {
    /// Creates a RefreshSucceeded event.
    pub fn refresh_succeeded(
        symbols: impl IntoIterator<Item = AssetSymbol>,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self::RefreshSucceeded {
            symbols: symbols.into_iter().collect(),
            observed_at,
        }
    }

    /// Creates a RefreshFailed event.
    pub fn refresh_failed(message: impl Into<String>, transient: bool) -> Self {
        Self::RefreshFailed {
            message: message.into(),
            transient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serializes_with_type_tag() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 14, 5, 0).unwrap();
        let event = EngineEvent::refresh_succeeded([AssetSymbol::Btc, AssetSymbol::Eth], at);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "refresh_succeeded");
        assert_eq!(json["symbols"], serde_json::json!(["BTC", "ETH"]));

        let failed = serde_json::to_value(EngineEvent::refresh_failed("boom", true)).unwrap();
        assert_eq!(failed["type"], "refresh_failed");
        assert_eq!(failed["transient"], true);
    }
}
