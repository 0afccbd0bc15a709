//! Rolling-mean smoothing of raw price columns.
//!
//! The extrema scan runs on a lightly smoothed signal so single-bar spikes do
//! not register as swings. Leading positions where the window is incomplete
//! are dropped, so the output is shorter than the input by `window - 1`.

/// Simple moving average with a fixed window. One value per input index from
/// `window - 1` onward; empty when the input is shorter than the window.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(values.len() - window + 1);
    let mut sum: f64 = values[..window].iter().sum();
    out.push(sum / window as f64);

    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out.push(sum / window as f64);
    }
    out
}
