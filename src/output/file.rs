//! Saves report artifacts into the output folder.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::level::AnalysisResult;

pub struct FileOutput {
    output_dir: PathBuf,
}

impl FileOutput {
    /// Creates the output folder if it does not exist yet.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).context(format!(
            "Failed to create output folder: {}",
            output_dir.display()
        ))?;
        Ok(FileOutput { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn dated_path(&self, stem: &str, name: &str, date_str: &str, ext: &str) -> PathBuf {
        self.output_dir
            .join(format!("{stem}_{name}_{date_str}.{ext}"))
    }

    fn save_text(&self, content: &str, path: &Path) -> Result<()> {
        fs::write(path, content).context(format!("Failed to write {}", path.display()))?;
        log::info!("Saved to {}", path.display());
        Ok(())
    }

    pub fn save_levels_text(&self, content: &str, stem: &str, date_str: &str) -> Result<PathBuf> {
        let path = self.dated_path(stem, "levels", date_str, "txt");
        self.save_text(content, &path)?;
        Ok(path)
    }

    pub fn save_swing_points_text(
        &self,
        content: &str,
        stem: &str,
        date_str: &str,
    ) -> Result<PathBuf> {
        let path = self.dated_path(stem, "swing_points", date_str, "txt");
        self.save_text(content, &path)?;
        Ok(path)
    }

    /// Machine-readable copy of the ranked result
    pub fn save_result_json(
        &self,
        result: &AnalysisResult,
        stem: &str,
        date_str: &str,
    ) -> Result<PathBuf> {
        let path = self.dated_path(stem, "levels", date_str, "json");
        let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        self.save_text(&json, &path)?;
        Ok(path)
    }
}
