//! Plain-text rendering of the analysis report.

use itertools::Itertools;

use crate::domain::swing::SwingPoint;
use crate::models::level::{AnalysisResult, LevelGroup};
use crate::utils::time_utils::epoch_ms_to_utc;

/// Levels shown per side in the report
const REPORT_LEVEL_COUNT: usize = 8;
const MAX_STARS: u32 = 5;

/// One `*` per strength point, capped
pub fn strength_indicator(strength: u32) -> String {
    "*".repeat(strength.min(MAX_STARS) as usize)
}

fn format_group_line(group: &LevelGroup) -> String {
    // Duplicate labels collapse for display only; the first occurrence keeps
    // its slot
    let sources = group.sources.iter().unique().join(", ");
    format!(
        "{:.2} {} - {}",
        group.price,
        strength_indicator(group.strength),
        sources
    )
}

pub fn format_levels_report(result: &AnalysisResult, report_date: &str) -> String {
    let mut output = Vec::new();

    output.push(format!("Technical Levels Report - {report_date}"));
    output.push(format!("Current Price: {:.2}", result.current_price));
    output.push(String::new());

    if let Some(note) = &result.volatility_note {
        output.push(format!("Volatility Analysis: {note}"));
        output.push(String::new());
    }

    output.push("Resistance Levels:".to_string());
    for group in result.resistance_levels.iter().take(REPORT_LEVEL_COUNT) {
        output.push(format_group_line(group));
    }
    output.push(String::new());

    output.push("Support Levels:".to_string());
    for group in result.support_levels.iter().take(REPORT_LEVEL_COUNT) {
        output.push(format_group_line(group));
    }

    output.push(String::new());
    output.push("Strength Indicator: * (weak) to ***** (very strong)".to_string());

    output.join("\n")
}

pub fn format_swing_points_report(
    swing_highs: &[SwingPoint],
    swing_lows: &[SwingPoint],
    report_date: &str,
) -> String {
    let mut output = Vec::new();

    output.push(format!("Swing Points Analysis - {report_date}"));
    output.push("=".repeat(60));
    output.push(String::new());

    output.push("SWING HIGHS (used for Fibonacci calculations)".to_string());
    output.push("-".repeat(60));
    push_swing_lines(&mut output, swing_highs, "No significant swing highs identified in the current data");
    output.push(String::new());

    output.push("SWING LOWS (used for Fibonacci calculations)".to_string());
    output.push("-".repeat(60));
    push_swing_lines(&mut output, swing_lows, "No significant swing lows identified in the current data");

    output.push(String::new());
    output.push("Note: Fibonacci retracements are calculated using combinations".to_string());
    output.push("of these swing highs and lows, prioritizing recent swings.".to_string());

    output.join("\n")
}

fn push_swing_lines(output: &mut Vec<String>, swings: &[SwingPoint], empty_message: &str) {
    if swings.is_empty() {
        output.push(empty_message.to_string());
        return;
    }

    // Most recent first
    let mut sorted: Vec<&SwingPoint> = swings.iter().collect();
    sorted.sort_by_key(|swing| std::cmp::Reverse(swing.timestamp_ms));
    for swing in sorted {
        output.push(format!(
            "{}: {:.2}",
            epoch_ms_to_utc(swing.timestamp_ms),
            swing.price
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::swing::SwingKind;

    fn group(price: f64, sources: Vec<&str>, strength: u32) -> LevelGroup {
        LevelGroup {
            price,
            sources: sources.into_iter().map(String::from).collect(),
            strength,
        }
    }

    #[test]
    fn test_strength_indicator_caps_at_five_stars() {
        assert_eq!(strength_indicator(1), "*");
        assert_eq!(strength_indicator(5), "*****");
        assert_eq!(strength_indicator(12), "*****");
    }

    #[test]
    fn test_levels_report_layout() {
        let result = AnalysisResult {
            current_price: 5002.5,
            support_levels: vec![group(4950.0, vec!["Volume cluster"], 2)],
            resistance_levels: vec![group(
                5002.5,
                vec!["Volume cluster", "Round number (100s)"],
                3,
            )],
            volatility_note: Some("VIX below 20-day average - favorable for upside targets.".into()),
        };

        let text = format_levels_report(&result, "2026-08-06");
        assert!(text.starts_with("Technical Levels Report - 2026-08-06"));
        assert!(text.contains("Current Price: 5002.50"));
        assert!(text.contains("Volatility Analysis: VIX below"));
        assert!(text.contains("5002.50 *** - Volume cluster, Round number (100s)"));
        assert!(text.contains("4950.00 ** - Volume cluster"));
        assert!(text.ends_with("Strength Indicator: * (weak) to ***** (very strong)"));
    }

    #[test]
    fn test_duplicate_sources_collapse_in_display() {
        let result = AnalysisResult {
            current_price: 100.0,
            support_levels: vec![],
            resistance_levels: vec![group(
                100.0,
                vec!["Volume cluster", "Volume cluster"],
                4,
            )],
            volatility_note: None,
        };

        let text = format_levels_report(&result, "2026-08-06");
        assert!(text.contains("100.00 **** - Volume cluster\n"));
    }

    #[test]
    fn test_missing_note_is_omitted() {
        let result = AnalysisResult {
            current_price: 100.0,
            support_levels: vec![],
            resistance_levels: vec![],
            volatility_note: None,
        };
        let text = format_levels_report(&result, "2026-08-06");
        assert!(!text.contains("Volatility Analysis"));
    }

    #[test]
    fn test_swing_report_orders_most_recent_first() {
        let highs = vec![
            SwingPoint::new(0, 110.0, SwingKind::High),
            SwingPoint::new(86_400_000, 120.0, SwingKind::High),
        ];
        let text = format_swing_points_report(&highs, &[], "2026-08-06");

        let newer = text.find("120.00").expect("newer swing listed");
        let older = text.find("110.00").expect("older swing listed");
        assert!(newer < older, "most recent swing comes first");
        assert!(text.contains("No significant swing lows identified"));
    }
}
