//! Advisory context from a secondary volatility index.

use crate::models::timeseries::OhlcvTimeSeries;

const BELOW_AVERAGE_NOTE: &str = "VIX below 20-day average - favorable for upside targets.";
const ABOVE_AVERAGE_NOTE: &str =
    "VIX above 20-day average - may need to decrease for upside targets.";

/// Compares the latest close of a volatility series against its own
/// `ma_period` moving average. The note is attached to the report verbatim
/// and never feeds the level aggregation. Absent when there is no series or
/// the window is unfilled.
pub fn volatility_note(series: Option<&OhlcvTimeSeries>, ma_period: usize) -> Option<String> {
    let series = series?;
    let closes = &series.close_prices;
    if ma_period == 0 || closes.len() < ma_period {
        return None;
    }

    let current = *closes.last()?;
    let average = closes[closes.len() - ma_period..].iter().sum::<f64>() / ma_period as f64;

    if current < average {
        Some(BELOW_AVERAGE_NOTE.to_string())
    } else {
        Some(ABOVE_AVERAGE_NOTE.to_string())
    }
}
