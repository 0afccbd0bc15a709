use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::domain::candle::Candle;
use crate::domain::symbol_interval::SymbolInterval;

// ============================================================================
// OhlcvTimeSeries: Raw time series data for one instrument
// ============================================================================

/// Column-oriented OHLCV history. Immutable once loaded; every analysis
/// component reads it through shared references.
///
/// Timestamps are explicit per bar (daily market data has weekend and holiday
/// gaps, so bar position alone cannot recover the date).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OhlcvTimeSeries {
    pub symbol_interval: SymbolInterval,

    /// One entry per bar, strictly increasing
    pub timestamps_ms: Vec<i64>,

    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,

    // Volumes
    pub volumes: Vec<f64>,
}

impl OhlcvTimeSeries {
    /// Build and validate in one step. Column lengths must agree and
    /// timestamps must be strictly increasing.
    pub fn from_columns(
        symbol_interval: SymbolInterval,
        timestamps_ms: Vec<i64>,
        open_prices: Vec<f64>,
        high_prices: Vec<f64>,
        low_prices: Vec<f64>,
        close_prices: Vec<f64>,
        volumes: Vec<f64>,
    ) -> Result<Self> {
        let series = OhlcvTimeSeries {
            symbol_interval,
            timestamps_ms,
            open_prices,
            high_prices,
            low_prices,
            close_prices,
            volumes,
        };
        series.validate()?;
        Ok(series)
    }

    pub fn validate(&self) -> Result<()> {
        let bars = self.timestamps_ms.len();
        let columns = [
            ("open", self.open_prices.len()),
            ("high", self.high_prices.len()),
            ("low", self.low_prices.len()),
            ("close", self.close_prices.len()),
            ("volume", self.volumes.len()),
        ];
        for (name, len) in columns {
            if len != bars {
                bail!(
                    "{}: {} column has {} rows but there are {} timestamps",
                    self.symbol_interval,
                    name,
                    len,
                    bars
                );
            }
        }

        if let Some(position) = self
            .timestamps_ms
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
        {
            bail!(
                "{}: timestamps not strictly increasing at bar {} ({} -> {})",
                self.symbol_interval,
                position + 1,
                self.timestamps_ms[position],
                self.timestamps_ms[position + 1]
            );
        }

        Ok(())
    }

    pub fn bars(&self) -> usize {
        self.timestamps_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps_ms.is_empty()
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
            self.volumes[idx],
        )
    }

    /// Latest close, i.e. the pipeline's notion of "current price"
    pub fn current_price(&self) -> Option<f64> {
        self.close_prices.last().copied()
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.timestamps_ms.last().copied()
    }

    /// Index range (start, end] covering the most recent `count` bars,
    /// or the whole series when shorter
    pub fn tail_range(&self, count: usize) -> (usize, usize) {
        let total = self.bars();
        (total.saturating_sub(count), total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(timestamps: Vec<i64>, closes: Vec<f64>) -> OhlcvTimeSeries {
        let bars = closes.len();
        OhlcvTimeSeries {
            symbol_interval: SymbolInterval::new("^GSPC", 86_400_000),
            timestamps_ms: timestamps,
            open_prices: closes.clone(),
            high_prices: closes.iter().map(|c| c + 1.0).collect(),
            low_prices: closes.iter().map(|c| c - 1.0).collect(),
            close_prices: closes,
            volumes: vec![1000.0; bars],
        }
    }

    #[test]
    fn test_validate_accepts_increasing_timestamps() {
        let s = series(vec![0, 1, 2], vec![10.0, 11.0, 12.0]);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_timestamps() {
        let s = series(vec![0, 1, 1], vec![10.0, 11.0, 12.0]);
        assert!(s.validate().is_err(), "duplicate timestamps must fail");
    }

    #[test]
    fn test_validate_rejects_ragged_columns() {
        let mut s = series(vec![0, 1, 2], vec![10.0, 11.0, 12.0]);
        s.volumes.pop();
        assert!(s.validate().is_err(), "ragged columns must fail");
    }

    #[test]
    fn test_tail_range_clamps_to_series_length() {
        let s = series(vec![0, 1, 2], vec![10.0, 11.0, 12.0]);
        assert_eq!(s.tail_range(2), (1, 3));
        assert_eq!(s.tail_range(10), (0, 3));
    }

    #[test]
    fn test_current_price_is_last_close() {
        let s = series(vec![0, 1, 2], vec![10.0, 11.0, 12.0]);
        assert_eq!(s.current_price(), Some(12.0));
        assert_eq!(OhlcvTimeSeries::default().current_price(), None);
    }
}
