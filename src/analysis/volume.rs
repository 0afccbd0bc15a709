//! Volume-by-price histogram: top clusters as levels, full profile for rendering.

use crate::analysis::aggregator::LevelSource;
use crate::models::level::Level;
use crate::models::timeseries::OhlcvTimeSeries;
use crate::models::volume_profile::VolumeProfile;
use crate::utils::maths_utils::{self, RangeF64};

pub const VOLUME_CLUSTER_LABEL: &str = "Volume cluster";

pub struct VolumeLevels<'a> {
    series: &'a OhlcvTimeSeries,
    bin_count: usize,
    cluster_count: usize,
}

impl<'a> VolumeLevels<'a> {
    pub fn new(series: &'a OhlcvTimeSeries, bin_count: usize, cluster_count: usize) -> Self {
        VolumeLevels {
            series,
            bin_count,
            cluster_count,
        }
    }

    /// Per-bin volume sums over `[min(low), max(high)]`. None when the series
    /// is empty or the price range has zero width, so the equal-width split
    /// never divides by zero.
    fn binned_volumes(&self) -> Option<(RangeF64, Vec<f64>)> {
        if self.series.is_empty() || self.bin_count == 0 {
            return None;
        }

        let min_price = maths_utils::get_min(&self.series.low_prices);
        let max_price = maths_utils::get_max(&self.series.high_prices);
        if max_price <= min_price {
            // Single bar or constant price
            return None;
        }

        let range = RangeF64::new(min_price, max_price, self.bin_count);
        let mut volumes = vec![0.0; self.bin_count];
        for idx in 0..self.series.bars() {
            let candle = self.series.get_candle(idx);
            volumes[range.chunk_index(candle.midpoint())] += candle.volume;
        }
        Some((range, volumes))
    }

    /// The `cluster_count` highest-volume bins as levels keyed by the bin's
    /// lower edge, descending by volume with ties broken by ascending bin
    /// index.
    pub fn clusters(&self) -> Vec<Level> {
        let Some((range, volumes)) = self.binned_volumes() else {
            return Vec::new();
        };

        let mut order: Vec<usize> = (0..volumes.len()).collect();
        order.sort_by(|&a, &b| volumes[b].total_cmp(&volumes[a]));
        order.truncate(self.cluster_count);

        order
            .into_iter()
            .map(|bin| Level::new(range.chunk_lower_bound(bin), VOLUME_CLUSTER_LABEL))
            .collect()
    }

    /// Full histogram, independent of the top-cluster cut
    pub fn profile(&self) -> VolumeProfile {
        let Some((range, volumes)) = self.binned_volumes() else {
            return VolumeProfile::default();
        };

        VolumeProfile {
            bin_centers: (0..volumes.len()).map(|i| range.chunk_center(i)).collect(),
            min_price: range.start_range,
            max_price: range.end_range,
            bin_width: range.chunk_size(),
            volumes,
        }
    }
}

impl LevelSource for VolumeLevels<'_> {
    fn name(&self) -> &'static str {
        "volume"
    }

    fn generate(&self) -> Vec<Level> {
        self.clusters()
    }
}
