//! Folder job description and per-folder conversion report

use std::path::PathBuf;

/// One page folder's worth of work: a name and its ordered page files
#[derive(Debug, Clone)]
pub struct FolderJob {
    pub name: String,
    pub tiff_paths: Vec<PathBuf>,
}

impl FolderJob {
    pub fn new(name: impl Into<String>, tiff_paths: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            tiff_paths,
        }
    }

    /// Output file stem: the `-2` suffix, if present, is stripped (§6)
    pub fn output_stem(&self) -> &str {
        self.name.strip_suffix("-2").unwrap_or(&self.name)
    }
}

/// Outcome of converting one folder: never fatal to sibling folders
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub folder: String,
    pub pages_total: usize,
    pub pages_written: usize,
    pub page_errors: Vec<String>,
}

impl ConversionReport {
    pub fn pages_skipped(&self) -> usize {
        self.pages_total - self.pages_written
    }
}
