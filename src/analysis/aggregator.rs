//! Merges generator output into ranked support/resistance groups.

use rayon::prelude::*;

use crate::models::level::{Level, LevelGroup};

/// A single producer of candidate levels.
///
/// Implementations are pure reads of the shared immutable series, so the
/// aggregator may evaluate them in any order or in parallel. One source
/// coming up empty (short series, degenerate range) must return an empty
/// vector rather than an error, so the others still contribute.
pub trait LevelSource: Sync {
    /// Short generator name for logs
    fn name(&self) -> &'static str;

    /// All candidate levels this source contributes
    fn generate(&self) -> Vec<Level>;
}

pub struct LevelAggregator {
    group_threshold: f64,
}

impl LevelAggregator {
    pub fn new(group_threshold: f64) -> Self {
        LevelAggregator { group_threshold }
    }

    /// Evaluate every source and return the combined list sorted ascending by
    /// price. The sort is stable, so for equal prices the registration order
    /// of the sources decides label order inside a later group.
    pub fn collect(&self, sources: &[&dyn LevelSource]) -> Vec<Level> {
        let per_source: Vec<Vec<Level>> =
            sources.par_iter().map(|source| source.generate()).collect();

        for (source, levels) in sources.iter().zip(&per_source) {
            log::debug!("source '{}' contributed {} levels", source.name(), levels.len());
        }

        let mut levels: Vec<Level> = per_source.into_iter().flatten().collect();
        levels.sort_by(|a, b| a.price.total_cmp(&b.price));
        levels
    }

    /// Sequential single-pass merge over the price-sorted input.
    ///
    /// A level joins the currently open group only when it is within
    /// `threshold` (relative) of the *previous member*, not of the group's
    /// running mean. Group membership is therefore order-and-threshold
    /// dependent; this is not a global clustering and must not become one.
    pub fn group(&self, sorted_levels: &[Level]) -> Vec<LevelGroup> {
        let mut groups = Vec::new();
        if sorted_levels.is_empty() {
            return groups;
        }

        let mut current: Vec<Level> = vec![sorted_levels[0].clone()];
        for level in &sorted_levels[1..] {
            let prev_price = current[current.len() - 1].price;
            if ((level.price - prev_price) / prev_price).abs() < self.group_threshold {
                current.push(level.clone());
            } else {
                groups.push(Self::finalize_group(&current));
                current = vec![level.clone()];
            }
        }
        groups.push(Self::finalize_group(&current));
        groups
    }

    fn finalize_group(members: &[Level]) -> LevelGroup {
        let mean = members.iter().map(|l| l.price).sum::<f64>() / members.len() as f64;
        let sources: Vec<String> = members.iter().map(|l| l.source.clone()).collect();
        let strength = Self::strength_of(&sources);
        LevelGroup {
            price: mean,
            sources,
            strength,
        }
    }

    /// Confluence score for one group: every member counts once, volume and
    /// price-action members count double, and stacked Fibonacci ratios add
    /// one per Fibonacci member beyond the first.
    pub fn strength_of(sources: &[String]) -> u32 {
        let mut strength = sources.len() as u32;

        for source in sources {
            if source.contains("Volume") || source.contains("price action") {
                strength += 1;
            }
        }

        let fib_count = sources.iter().filter(|s| s.contains("Fibonacci")).count() as u32;
        if fib_count > 1 {
            strength += fib_count - 1;
        }

        strength
    }

    /// Split into (support, resistance) relative to the current price. The
    /// boundary is inclusive on the resistance side: a group sitting exactly
    /// at the current price resists.
    pub fn classify(
        groups: Vec<LevelGroup>,
        current_price: f64,
    ) -> (Vec<LevelGroup>, Vec<LevelGroup>) {
        groups
            .into_iter()
            .partition(|group| group.price < current_price)
    }

    /// Stable descending sort by strength; ties keep their grouping order.
    pub fn rank(groups: &mut [LevelGroup]) {
        groups.sort_by(|a, b| b.strength.cmp(&a.strength));
    }
}
