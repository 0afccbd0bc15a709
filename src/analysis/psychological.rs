//! Round-number levels near the current price.

use crate::analysis::aggregator::LevelSource;
use crate::models::level::Level;

pub struct PsychologicalLevels {
    current_price: f64,
    nearby_pct: f64,
}

impl PsychologicalLevels {
    pub fn new(current_price: f64, nearby_pct: f64) -> Self {
        PsychologicalLevels {
            current_price,
            nearby_pct,
        }
    }

    /// Round numbers inside the symmetric window around the current price.
    /// Priority 100 > 50 > 25 is a hard rule: a number already emitted at a
    /// coarser step never reappears at a finer one.
    pub fn levels(&self) -> Vec<Level> {
        let half_width = self.current_price * self.nearby_pct / 100.0;
        let min_price = self.current_price - half_width;
        let max_price = self.current_price + half_width;

        let mut levels = Vec::new();
        for value in multiples_in_window(100.0, min_price, max_price) {
            levels.push(Level::new(value, "Round number (100s)"));
        }
        for value in multiples_in_window(50.0, min_price, max_price) {
            if value % 100.0 != 0.0 {
                levels.push(Level::new(value, "Round number (50s)"));
            }
        }
        for value in multiples_in_window(25.0, min_price, max_price) {
            if value % 100.0 != 0.0 && value % 50.0 != 0.0 {
                levels.push(Level::new(value, "Round number (25s)"));
            }
        }
        levels
    }
}

impl LevelSource for PsychologicalLevels {
    fn name(&self) -> &'static str {
        "psychological"
    }

    fn generate(&self) -> Vec<Level> {
        self.levels()
    }
}

/// Multiples of `step` inside `[min, max]`, both edges inclusive
fn multiples_in_window(step: f64, min: f64, max: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut value = (min / step).ceil() * step;
    while value <= max {
        out.push(value);
        value += step;
    }
    out
}
