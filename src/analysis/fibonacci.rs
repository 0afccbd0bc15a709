//! Fibonacci retracement levels anchored on recent swing pairs.

use crate::analysis::aggregator::LevelSource;
use crate::domain::swing::{SwingPoint, TrendDirection};
use crate::models::level::Level;

/// Retracement ratios between the swing low (0) and swing high (1)
pub const FIB_RATIOS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

pub struct FibonacciLevels<'a> {
    swing_highs: &'a [SwingPoint],
    swing_lows: &'a [SwingPoint],
    swing_pairs: usize,
}

impl<'a> FibonacciLevels<'a> {
    pub fn new(
        swing_highs: &'a [SwingPoint],
        swing_lows: &'a [SwingPoint],
        swing_pairs: usize,
    ) -> Self {
        FibonacciLevels {
            swing_highs,
            swing_lows,
            swing_pairs,
        }
    }

    /// Direction of the single most recent swing overall. A high means price
    /// is retracing down from it; a one-sided swing set uses that side.
    fn trend_direction(
        recent_highs: &[&SwingPoint],
        recent_lows: &[&SwingPoint],
    ) -> TrendDirection {
        match (recent_highs.first(), recent_lows.first()) {
            (Some(high), Some(low)) => {
                if high.timestamp_ms > low.timestamp_ms {
                    TrendDirection::Down
                } else {
                    TrendDirection::Up
                }
            }
            (Some(_), None) => TrendDirection::Down,
            _ => TrendDirection::Up,
        }
    }

    pub fn levels(&self) -> Vec<Level> {
        if self.swing_highs.is_empty() || self.swing_lows.is_empty() {
            return Vec::new();
        }

        let recent_highs = most_recent(self.swing_highs, self.swing_pairs);
        let recent_lows = most_recent(self.swing_lows, self.swing_pairs);
        let trend = Self::trend_direction(&recent_highs, &recent_lows);

        let mut levels = Vec::new();
        // The i-th most recent high pairs with the i-th most recent low even
        // when the two are not temporally adjacent; consumers depend on these
        // exact anchors.
        for (i, (high, low)) in recent_highs.iter().zip(recent_lows.iter()).enumerate() {
            let diff = high.price - low.price;
            for ratio in FIB_RATIOS {
                let price = low.price + ratio * diff;
                let source =
                    format!("Fibonacci {} (Fib_{}_{})", ratio_label(ratio), trend, i + 1);
                levels.push(Level::new(price, source));
            }
        }
        levels
    }
}

impl LevelSource for FibonacciLevels<'_> {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn generate(&self) -> Vec<Level> {
        self.levels()
    }
}

/// Up to `n` swings, most recent first
fn most_recent(swings: &[SwingPoint], n: usize) -> Vec<&SwingPoint> {
    let mut sorted: Vec<&SwingPoint> = swings.iter().collect();
    sorted.sort_by_key(|swing| std::cmp::Reverse(swing.timestamp_ms));
    sorted.truncate(n);
    sorted
}

/// Ratio rendered as a truncated integer percentage; the 0 and 1 endpoints
/// drop the `%` suffix ("0", "23%", "38%", "50%", "61%", "78%", "100").
fn ratio_label(ratio: f64) -> String {
    let pct = (ratio * 100.0) as u32;
    if ratio == 0.0 || ratio == 1.0 {
        pct.to_string()
    } else {
        format!("{pct}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::swing::SwingKind;

    fn high(timestamp_ms: i64, price: f64) -> SwingPoint {
        SwingPoint::new(timestamp_ms, price, SwingKind::High)
    }

    fn low(timestamp_ms: i64, price: f64) -> SwingPoint {
        SwingPoint::new(timestamp_ms, price, SwingKind::Low)
    }

    #[test]
    fn test_empty_swing_side_yields_nothing() {
        let highs = [high(1, 110.0)];
        assert!(FibonacciLevels::new(&highs, &[], 3).levels().is_empty());
        assert!(FibonacciLevels::new(&[], &[], 3).levels().is_empty());
    }

    #[test]
    fn test_ratio_labels_truncate() {
        assert_eq!(ratio_label(0.0), "0");
        assert_eq!(ratio_label(0.236), "23%");
        assert_eq!(ratio_label(0.382), "38%");
        assert_eq!(ratio_label(0.5), "50%");
        assert_eq!(ratio_label(0.618), "61%");
        assert_eq!(ratio_label(0.786), "78%");
        assert_eq!(ratio_label(1.0), "100");
    }

    #[test]
    fn test_downtrend_when_latest_swing_is_a_high() {
        let highs = [high(10, 110.0)];
        let lows = [low(5, 100.0)];
        let levels = FibonacciLevels::new(&highs, &lows, 3).levels();

        assert_eq!(levels.len(), 7);
        assert!(levels[0].source.ends_with("(Fib_Down_1)"));
        // low + ratio * (high - low)
        assert_eq!(levels[0].price, 100.0);
        assert_eq!(levels[3].price, 105.0);
        assert_eq!(levels[6].price, 110.0);
    }

    #[test]
    fn test_uptrend_when_latest_swing_is_a_low() {
        let highs = [high(5, 110.0)];
        let lows = [low(10, 100.0)];
        let levels = FibonacciLevels::new(&highs, &lows, 3).levels();
        assert!(levels.iter().all(|l| l.source.contains("Fib_Up_")));
    }

    #[test]
    fn test_pairs_ranked_independently_per_side() {
        // Highs at t=30 and t=10; lows at t=20 and t=5. Pair 1 is (t30 high,
        // t20 low), pair 2 is (t10 high, t5 low) regardless of interleaving.
        let highs = [high(10, 200.0), high(30, 300.0)];
        let lows = [low(5, 100.0), low(20, 150.0)];
        let levels = FibonacciLevels::new(&highs, &lows, 3).levels();

        assert_eq!(levels.len(), 14, "two pairs, seven ratios each");

        // Pair 1: 150 .. 300, downtrend (latest swing is the t=30 high)
        assert_eq!(levels[0].price, 150.0);
        assert_eq!(levels[0].source, "Fibonacci 0 (Fib_Down_1)");
        assert_eq!(levels[6].price, 300.0);

        // Pair 2: 100 .. 200, same trend label for every pair in the run
        assert_eq!(levels[7].price, 100.0);
        assert_eq!(levels[7].source, "Fibonacci 0 (Fib_Down_2)");
        assert_eq!(levels[13].price, 200.0);
    }

    #[test]
    fn test_pair_count_is_min_of_sides_and_config() {
        let highs = [high(1, 110.0), high(2, 120.0), high(3, 130.0)];
        let lows = [low(4, 100.0)];
        let levels = FibonacciLevels::new(&highs, &lows, 3).levels();
        assert_eq!(levels.len(), 7, "only one low available, one pair");
    }
}
