use std::collections::BTreeSet;
use std::time::Duration;

use chrono_tz::Tz;

use coinboard_market_data::AssetSymbol;

use crate::constants::DEFAULT_REFRESH_INTERVAL_SECS;
use crate::errors::{Error, Result};
use crate::selection::AssetCatalog;
use crate::utils::time_utils::DEFAULT_LABEL_TZ;

/// Engine configuration.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Symbols fetched on every refresh, in request order.
    pub symbols: Vec<AssetSymbol>,

    /// Period between refreshes, measured from engine start.
    pub refresh_interval: Duration,

    /// Asset shown before the user picks one.
    pub initial_selection: Option<AssetSymbol>,

    pub catalog: AssetCatalog,

    /// Timezone of the "last update" label.
    pub label_timezone: Tz,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            symbols: AssetSymbol::ALL.to_vec(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            initial_selection: Some(AssetSymbol::Btc),
            catalog: AssetCatalog::default(),
            label_timezone: DEFAULT_LABEL_TZ,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(Error::InvalidConfigValue(
                "at least one symbol must be tracked".to_string(),
            ));
        }

        let unique: BTreeSet<_> = self.symbols.iter().collect();
        if unique.len() != self.symbols.len() {
            return Err(Error::InvalidConfigValue(format!(
                "duplicate symbols in {:?}",
                self.symbols
            )));
        }

        if self.refresh_interval.is_zero() {
            return Err(Error::InvalidConfigValue(
                "refresh interval must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
