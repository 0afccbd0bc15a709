use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::persistence::KLINE_CACHE_VERSION;
use crate::models::timeseries::OhlcvTimeSeries;

/// Serialized kline cache wrapper written by the fetch collaborator.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheFile {
    pub version: f64,
    pub timestamp_ms: i64,
    pub interval_ms: i64,
    pub data: OhlcvTimeSeries,
}

impl CacheFile {
    pub fn new(data: OhlcvTimeSeries) -> Self {
        Self {
            version: KLINE_CACHE_VERSION,
            timestamp_ms: Utc::now().timestamp_millis(),
            interval_ms: data.symbol_interval.interval_ms,
            data,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open cache file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let cache: CacheFile = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize cache: {:?}", path))?;

        if cache.version != KLINE_CACHE_VERSION {
            bail!(
                "Cache version mismatch in {:?}: found {}, expected {}",
                path,
                cache.version,
                KLINE_CACHE_VERSION
            );
        }
        Ok(cache)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize cache to: {}", path.display()))
    }

    /// Load a cache and hand back its series, validated. Malformed files and
    /// broken series invariants are hard errors here, before the pipeline
    /// starts.
    pub fn load_series(path: &Path) -> Result<OhlcvTimeSeries> {
        let cache = Self::load_from_path(path)?;
        cache.data.validate()?;
        Ok(cache.data)
    }
}
