// Report rendering and file artifacts (thin glue over the analysis result)
pub mod file;
pub mod text;

pub use file::FileOutput;
