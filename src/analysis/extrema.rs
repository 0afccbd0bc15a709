//! Symmetric-window extrema scan and swing-point extraction.

use crate::analysis::smoothing::rolling_mean;
use crate::domain::swing::{SwingKind, SwingPoint};
use crate::models::timeseries::OhlcvTimeSeries;

/// Indices whose value strictly exceeds every neighbour within `order` bars
/// on both sides. Indices closer than `order` to either boundary are never
/// flagged, and a sequence of length `<= 2 * order + 1` yields nothing.
/// Strict comparison means flat plateaus produce no extremum at any point.
pub fn local_maxima(values: &[f64], order: usize) -> Vec<usize> {
    local_extrema(values, order, |candidate, neighbour| candidate > neighbour)
}

/// Mirror of [`local_maxima`] with strictly-less comparison.
pub fn local_minima(values: &[f64], order: usize) -> Vec<usize> {
    local_extrema(values, order, |candidate, neighbour| candidate < neighbour)
}

fn local_extrema(
    values: &[f64],
    order: usize,
    beats: impl Fn(f64, f64) -> bool,
) -> Vec<usize> {
    if order == 0 || values.len() <= 2 * order + 1 {
        return Vec::new();
    }

    let mut indices = Vec::new();
    for i in order..values.len() - order {
        let candidate = values[i];
        let wins = (i - order..i)
            .chain(i + 1..=i + order)
            .all(|j| beats(candidate, values[j]));
        if wins {
            indices.push(i);
        }
    }
    indices
}

/// Swing highs and lows for a series, in timestamp order.
///
/// The high and low columns are smoothed independently and scanned for
/// extrema; a flagged position reports the *raw* high/low of that bar, not
/// the smoothed value.
pub fn find_swing_points(
    series: &OhlcvTimeSeries,
    smoothing_window: usize,
    order: usize,
) -> (Vec<SwingPoint>, Vec<SwingPoint>) {
    // Smoothed columns start at bar `window - 1`; scan indices map back to
    // raw bars through this offset.
    let offset = smoothing_window.saturating_sub(1);

    let high_smooth = rolling_mean(&series.high_prices, smoothing_window);
    let low_smooth = rolling_mean(&series.low_prices, smoothing_window);

    let swing_highs = local_maxima(&high_smooth, order)
        .into_iter()
        .map(|i| {
            SwingPoint::new(
                series.timestamps_ms[i + offset],
                series.high_prices[i + offset],
                SwingKind::High,
            )
        })
        .collect();

    let swing_lows = local_minima(&low_smooth, order)
        .into_iter()
        .map(|i| {
            SwingPoint::new(
                series.timestamps_ms[i + offset],
                series.low_prices[i + offset],
                SwingKind::Low,
            )
        })
        .collect();

    (swing_highs, swing_lows)
}
