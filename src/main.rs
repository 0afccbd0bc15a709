use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use level_scout::analysis::LevelAnalyzer;
use level_scout::data::CacheFile;
use level_scout::output::{FileOutput, text};
use level_scout::utils::TimeUtils;
use level_scout::Cli;

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading
    log::info!("Loading klines from {}", args.data.display());
    let series = CacheFile::load_series(&args.data)?;
    let volatility_series = match &args.volatility_data {
        Some(path) => Some(
            CacheFile::load_series(path)
                .context(format!("Failed to load volatility series from {:?}", path))?,
        ),
        None => None,
    };

    // D. Analysis
    let analyzer = LevelAnalyzer::default();
    let report = analyzer.analyze(&series, volatility_series.as_ref())?;

    // E. Render + Save
    let date_str = Utc::now().format(TimeUtils::STANDARD_TIME_FORMAT).to_string();
    let levels_text = text::format_levels_report(&report.result, &date_str);
    let swing_points_text =
        text::format_swing_points_report(&report.swing_highs, &report.swing_lows, &date_str);

    println!("\n{levels_text}");

    if !args.no_files {
        let stem = series.symbol_interval.file_stem();
        let file_output = FileOutput::new(&args.output)?;
        file_output.save_levels_text(&levels_text, &stem, &date_str)?;
        file_output.save_swing_points_text(&swing_points_text, &stem, &date_str)?;
        file_output.save_result_json(&report.result, &stem, &date_str)?;
    }

    Ok(())
}
