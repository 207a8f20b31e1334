use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use coinboard_market_data::AssetSymbol;

/// Opaque handle to an icon resource.
///
/// The engine passes it through untouched; only the renderer knows how to
/// resolve it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(Arc<str>);

impl IconRef {
    pub fn new(handle: impl Into<Arc<str>>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The asset currently chosen for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub symbol: AssetSymbol,
    pub display_title: String,
    pub icon: IconRef,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct AssetPresentation {
    title: String,
    icon: IconRef,
}

/// Title and icon for every selectable symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetCatalog {
    entries: HashMap<AssetSymbol, AssetPresentation>,
}

impl AssetCatalog {
    /// Override the title and icon shown for a symbol.
    pub fn with_entry(
        mut self,
        symbol: AssetSymbol,
        title: impl Into<String>,
        icon: IconRef,
    ) -> Self {
        self.entries.insert(
            symbol,
            AssetPresentation {
                title: title.into(),
                icon,
            },
        );
        self
    }

    pub fn title(&self, symbol: AssetSymbol) -> String {
        self.entries
            .get(&symbol)
            .map(|entry| entry.title.clone())
            .unwrap_or_else(|| symbol.default_title().to_string())
    }

    pub fn icon(&self, symbol: AssetSymbol) -> IconRef {
        self.entries
            .get(&symbol)
            .map(|entry| entry.icon.clone())
            .unwrap_or_else(|| default_icon(symbol))
    }

    /// Build the selection record for a symbol.
    pub fn selection(&self, symbol: AssetSymbol) -> Selection {
        Selection {
            symbol,
            display_title: self.title(symbol),
            icon: self.icon(symbol),
        }
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        let entries = AssetSymbol::ALL
            .into_iter()
            .map(|symbol| {
                (
                    symbol,
                    AssetPresentation {
                        title: symbol.default_title().to_string(),
                        icon: default_icon(symbol),
                    },
                )
            })
            .collect();
        Self { entries }
    }
}

fn default_icon(symbol: AssetSymbol) -> IconRef {
    IconRef::new(format!(
        "assets/{}.png",
        symbol.as_str().to_ascii_lowercase()
    ))
}
