// Kline cache loading. Fetching market data is an external collaborator
// concern; the pipeline only ever sees an already-fetched, validated series.
pub mod cache_file;

pub use cache_file::CacheFile;
