// Level generators and the aggregation pipeline
pub mod aggregator;
pub mod extrema;
pub mod fibonacci;
pub mod moving_averages;
pub mod pipeline;
pub mod price_action;
pub mod psychological;
pub mod smoothing;
pub mod volatility;
pub mod volume;

// Re-export commonly used types
pub use aggregator::{LevelAggregator, LevelSource};
pub use pipeline::LevelAnalyzer;
