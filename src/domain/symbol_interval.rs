use serde::{Deserialize, Serialize};

use crate::utils::TimeUtils;

/// Instrument symbol plus the bar interval its klines were fetched at
#[derive(Serialize, Deserialize, Debug, Clone, Default, Hash, Eq, PartialEq)]
pub struct SymbolInterval {
    pub symbol: String,
    pub interval_ms: i64,
}

impl SymbolInterval {
    pub fn new(symbol: impl Into<String>, interval_ms: i64) -> Self {
        SymbolInterval {
            symbol: symbol.into(),
            interval_ms,
        }
    }

    // Index tickers carry a leading caret (^GSPC, ^VIX); strip it so the
    // symbol is safe to embed in output filenames.
    pub fn file_stem(&self) -> String {
        self.symbol.replace('^', "")
    }
}

impl std::fmt::Display for SymbolInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} @ {}",
            self.symbol,
            TimeUtils::interval_to_string(self.interval_ms)
        )
    }
}
