//! File locations for kline caches and report artifacts

pub const DEFAULT_KLINE_CACHE: &str = "klines/gspc_1d.kline";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Bumped whenever the cache layout changes; the loader refuses other versions.
pub const KLINE_CACHE_VERSION: f64 = 1.0;
