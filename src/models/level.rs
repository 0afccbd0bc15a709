use serde::{Deserialize, Serialize};

use crate::domain::swing::SwingPoint;
use crate::models::volume_profile::VolumeProfile;

/// A single candidate price level emitted by one generator.
/// Several sources landing near the same price is exactly the confluence the
/// aggregator scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub source: String,
}

impl Level {
    pub fn new(price: f64, source: impl Into<String>) -> Self {
        Level {
            price,
            source: source.into(),
        }
    }
}

/// Nearby levels merged into one consolidated line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelGroup {
    /// Arithmetic mean of the member prices
    pub price: f64,
    /// Member labels in merge order; duplicates kept, each counts toward strength
    pub sources: Vec<String>,
    /// Confluence score used for ranking
    pub strength: u32,
}

/// Ranked classification handed to output collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub current_price: f64,
    /// Groups strictly below the current price, strongest first
    pub support_levels: Vec<LevelGroup>,
    /// Groups at or above the current price, strongest first
    pub resistance_levels: Vec<LevelGroup>,
    pub volatility_note: Option<String>,
}

/// Everything one analysis run produces: the ranked result plus the raw
/// artifacts renderers want independently (swing sequences, full profile)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelReport {
    pub result: AnalysisResult,
    pub swing_highs: Vec<SwingPoint>,
    pub swing_lows: Vec<SwingPoint>,
    pub volume_profile: VolumeProfile,
}
