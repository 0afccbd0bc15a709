//! Pivot support/resistance from the recent window.

use crate::analysis::aggregator::LevelSource;
use crate::models::level::Level;
use crate::models::timeseries::OhlcvTimeSeries;

pub const PRICE_ACTION_LABEL: &str = "Recent price action";

pub struct PivotLevels<'a> {
    series: &'a OhlcvTimeSeries,
    window: usize,
}

impl<'a> PivotLevels<'a> {
    pub fn new(series: &'a OhlcvTimeSeries, window: usize) -> Self {
        PivotLevels { series, window }
    }

    /// 4-point pivots over the most recent `window` bars: a bar whose low is
    /// strictly below the lows one and two bars away on both sides is a
    /// support candidate, and symmetrically for highs. The two bars at each
    /// end have no full neighbourhood and are skipped; windows shorter than
    /// five bars yield nothing.
    pub fn levels(&self) -> Vec<Level> {
        let (start, end) = self.series.tail_range(self.window);
        let lows = &self.series.low_prices[start..end];
        let highs = &self.series.high_prices[start..end];

        let mut levels = Vec::new();

        // Supports first, then resistances; the collection order downstream
        // depends on it
        for i in 2..lows.len().saturating_sub(2) {
            let low = lows[i];
            if low < lows[i - 1] && low < lows[i - 2] && low < lows[i + 1] && low < lows[i + 2] {
                levels.push(Level::new(low, PRICE_ACTION_LABEL));
            }
        }

        for i in 2..highs.len().saturating_sub(2) {
            let high = highs[i];
            if high > highs[i - 1]
                && high > highs[i - 2]
                && high > highs[i + 1]
                && high > highs[i + 2]
            {
                levels.push(Level::new(high, PRICE_ACTION_LABEL));
            }
        }

        levels
    }
}

impl LevelSource for PivotLevels<'_> {
    fn name(&self) -> &'static str {
        "price_action"
    }

    fn generate(&self) -> Vec<Level> {
        self.levels()
    }
}
