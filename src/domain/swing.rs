use serde::{Deserialize, Serialize};

/// Which side of price action a swing point anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingKind {
    High,
    Low,
}

/// A local price extremum over a symmetric neighbourhood.
/// Lives for one analysis run; the Fibonacci generator and the swing-points
/// report are its only consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    pub timestamp_ms: i64,
    pub price: f64,
    pub kind: SwingKind,
}

impl SwingPoint {
    pub fn new(timestamp_ms: i64, price: f64, kind: SwingKind) -> Self {
        SwingPoint {
            timestamp_ms,
            price,
            kind,
        }
    }
}

/// Direction of the most recent swing. Decides the Fib_Down/Fib_Up labelling
/// for every pair in a run (it does not vary per pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TrendDirection {
    Down,
    Up,
}
