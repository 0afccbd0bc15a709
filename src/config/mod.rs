//! Configuration module for the level-scout application.

pub mod analysis;
pub mod persistence;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig};
pub use persistence::{DEFAULT_KLINE_CACHE, DEFAULT_OUTPUT_DIR, KLINE_CACHE_VERSION};
