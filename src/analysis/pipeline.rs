//! One-shot orchestration: swing scan, every level source, aggregation into a
//! ranked report, plus the optional volatility note.

use anyhow::{Result, bail};

use crate::analysis::aggregator::{LevelAggregator, LevelSource};
use crate::analysis::extrema;
use crate::analysis::fibonacci::FibonacciLevels;
use crate::analysis::moving_averages::MovingAverageLevels;
use crate::analysis::price_action::PivotLevels;
use crate::analysis::psychological::PsychologicalLevels;
use crate::analysis::volatility;
use crate::analysis::volume::VolumeLevels;
use crate::config::{ANALYSIS, AnalysisConfig};
use crate::models::level::{AnalysisResult, LevelReport};
use crate::models::timeseries::OhlcvTimeSeries;

pub struct LevelAnalyzer<'a> {
    config: &'a AnalysisConfig,
}

impl Default for LevelAnalyzer<'static> {
    fn default() -> Self {
        LevelAnalyzer { config: &ANALYSIS }
    }
}

impl<'a> LevelAnalyzer<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        LevelAnalyzer { config }
    }

    /// Run the full pipeline over an immutable series. Individual sources
    /// coming up empty is fine (short history, degenerate range); only a
    /// series with no bars at all is an error, since it has no current price
    /// to classify against.
    pub fn analyze(
        &self,
        series: &OhlcvTimeSeries,
        volatility_series: Option<&OhlcvTimeSeries>,
    ) -> Result<LevelReport> {
        let Some(current_price) = series.current_price() else {
            bail!("cannot analyse {}: series has no bars", series.symbol_interval);
        };
        let cfg = self.config;

        let (swing_highs, swing_lows) = extrema::find_swing_points(
            series,
            cfg.swing.smoothing_window,
            cfg.swing.extrema_order,
        );
        log::info!(
            "{}: {} swing highs, {} swing lows",
            series.symbol_interval,
            swing_highs.len(),
            swing_lows.len()
        );

        let volume = VolumeLevels::new(series, cfg.volume.bin_count, cfg.volume.cluster_count);
        let psychological = PsychologicalLevels::new(current_price, cfg.psychological.nearby_pct);
        let pivots = PivotLevels::new(series, cfg.price_action.window);
        let moving_averages = MovingAverageLevels::new(series, cfg.moving_averages.periods);
        let fibonacci =
            FibonacciLevels::new(&swing_highs, &swing_lows, cfg.fibonacci.swing_pairs);

        // Registration order fixes label order inside merged groups
        let sources: [&dyn LevelSource; 5] = [
            &volume,
            &psychological,
            &pivots,
            &moving_averages,
            &fibonacci,
        ];

        let aggregator = LevelAggregator::new(cfg.grouping.threshold);
        let levels = aggregator.collect(&sources);
        let groups = aggregator.group(&levels);
        log::info!("{} raw levels merged into {} groups", levels.len(), groups.len());

        let (mut support_levels, mut resistance_levels) =
            LevelAggregator::classify(groups, current_price);
        LevelAggregator::rank(&mut support_levels);
        LevelAggregator::rank(&mut resistance_levels);

        let volatility_note =
            volatility::volatility_note(volatility_series, cfg.volatility.ma_period);

        Ok(LevelReport {
            result: AnalysisResult {
                current_price,
                support_levels,
                resistance_levels,
                volatility_note,
            },
            swing_highs,
            swing_lows,
            volume_profile: volume.profile(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symbol_interval::SymbolInterval;
    use crate::utils::TimeUtils;

    /// 301 daily bars climbing one point per bar from 100 to 400, constant
    /// volume
    fn monotonic_series() -> OhlcvTimeSeries {
        let closes: Vec<f64> = (0..=300).map(|i| 100.0 + i as f64).collect();
        OhlcvTimeSeries {
            symbol_interval: SymbolInterval::new("^GSPC", TimeUtils::MS_IN_D),
            timestamps_ms: (0..=300).map(|i| i * TimeUtils::MS_IN_D).collect(),
            open_prices: closes.clone(),
            high_prices: closes.iter().map(|c| c + 0.5).collect(),
            low_prices: closes.iter().map(|c| c - 0.5).collect(),
            close_prices: closes,
            volumes: vec![1000.0; 301],
        }
    }

    #[test]
    fn test_monotonic_series_has_no_swings_but_round_number_at_400() {
        let report = LevelAnalyzer::default()
            .analyze(&monotonic_series(), None)
            .expect("analysis runs");

        // A one-directional trend has no interior extremum on either side
        assert!(report.swing_highs.is_empty());
        assert!(report.swing_lows.is_empty());

        // 2% window around 400 is [392, 408]: the only round number is 400
        // itself, classified as resistance (boundary is inclusive there)
        let round_groups: Vec<_> = report
            .result
            .resistance_levels
            .iter()
            .filter(|g| g.sources.iter().any(|s| s.contains("Round number")))
            .collect();
        assert_eq!(round_groups.len(), 1);
        assert_eq!(round_groups[0].price, 400.0);
        assert_eq!(round_groups[0].sources, vec!["Round number (100s)".to_string()]);
        assert!(
            !report
                .result
                .support_levels
                .iter()
                .any(|g| g.sources.iter().any(|s| s.contains("Round number"))),
            "no round number below the current price in this window"
        );

        // Both moving averages trail a rising close and land in support
        assert!(
            report
                .result
                .support_levels
                .iter()
                .any(|g| g.sources.iter().any(|s| s.contains("MA_50"))),
        );
        assert_eq!(report.result.current_price, 400.0);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let series = monotonic_series();
        let analyzer = LevelAnalyzer::default();

        let first = analyzer.analyze(&series, None).expect("first run");
        let second = analyzer.analyze(&series, None).expect("second run");
        assert_eq!(first, second, "identical input must reproduce the report");
    }

    #[test]
    fn test_support_and_resistance_partition_by_current_price() {
        let report = LevelAnalyzer::default()
            .analyze(&monotonic_series(), None)
            .expect("analysis runs");

        let current = report.result.current_price;
        assert!(
            report
                .result
                .support_levels
                .iter()
                .all(|g| g.price < current)
        );
        assert!(
            report
                .result
                .resistance_levels
                .iter()
                .all(|g| g.price >= current)
        );
    }

    #[test]
    fn test_ranking_is_descending_by_strength() {
        let report = LevelAnalyzer::default()
            .analyze(&monotonic_series(), None)
            .expect("analysis runs");

        for side in [&report.result.support_levels, &report.result.resistance_levels] {
            for pair in side.windows(2) {
                assert!(pair[0].strength >= pair[1].strength);
            }
        }
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let analyzer = LevelAnalyzer::default();
        assert!(analyzer.analyze(&OhlcvTimeSeries::default(), None).is_err());
    }

    #[test]
    fn test_missing_volatility_series_leaves_note_absent() {
        let report = LevelAnalyzer::default()
            .analyze(&monotonic_series(), None)
            .expect("analysis runs");
        assert_eq!(report.result.volatility_note, None);
    }
}
