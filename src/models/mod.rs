// Data models for level analysis
// These modules contain pure business logic independent of output formatting

pub mod level;
pub mod timeseries;
pub mod volume_profile;

// Re-export key types for convenience
pub use level::{AnalysisResult, Level, LevelGroup, LevelReport};
pub use timeseries::OhlcvTimeSeries;
pub use volume_profile::VolumeProfile;
