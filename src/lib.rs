// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use analysis::{LevelAggregator, LevelAnalyzer, LevelSource};
pub use data::CacheFile;
pub use domain::{Candle, SwingKind, SwingPoint, SymbolInterval};
pub use models::{AnalysisResult, Level, LevelGroup, LevelReport, OhlcvTimeSeries, VolumeProfile};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Kline cache file to analyse (written by the fetch collaborator)
    #[arg(long, default_value = config::persistence::DEFAULT_KLINE_CACHE)]
    pub data: PathBuf,

    /// Optional volatility-index kline cache (e.g. VIX) for the advisory note
    #[arg(long)]
    pub volatility_data: Option<PathBuf>,

    /// Folder for report artifacts
    #[arg(long, default_value = config::persistence::DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Print the report to stdout only, skip writing files
    #[arg(long, default_value_t = false)]
    pub no_files: bool,
}
