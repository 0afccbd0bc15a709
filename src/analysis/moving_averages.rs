//! Simple moving averages of the close, surfaced as levels.

use crate::analysis::aggregator::LevelSource;
use crate::models::level::Level;
use crate::models::timeseries::OhlcvTimeSeries;

pub struct MovingAverageLevels<'a> {
    series: &'a OhlcvTimeSeries,
    periods: &'a [usize],
}

impl<'a> MovingAverageLevels<'a> {
    pub fn new(series: &'a OhlcvTimeSeries, periods: &'a [usize]) -> Self {
        MovingAverageLevels { series, periods }
    }

    /// Latest SMA value for `period`; None while the window is unfilled
    pub fn latest_sma(&self, period: usize) -> Option<f64> {
        let closes = &self.series.close_prices;
        if period == 0 || closes.len() < period {
            return None;
        }
        let sum: f64 = closes[closes.len() - period..].iter().sum();
        Some(sum / period as f64)
    }

    pub fn levels(&self) -> Vec<Level> {
        self.periods
            .iter()
            .filter_map(|&period| {
                self.latest_sma(period)
                    .map(|value| Level::new(value, format!("MA_{period} support/resistance")))
            })
            .collect()
    }
}

impl LevelSource for MovingAverageLevels<'_> {
    fn name(&self) -> &'static str {
        "moving_averages"
    }

    fn generate(&self) -> Vec<Level> {
        self.levels()
    }
}
