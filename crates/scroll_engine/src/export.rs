use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

pub const LISTING_FILENAME: &str = "listing.json";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("output directory unusable: {path:?}: {reason}")]
    OutputDir { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedItem {
    pub page: u32,
    pub html: String,
}

/// Everything harvested from one listing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingExport {
    pub source_url: String,
    pub final_url: Option<String>,
    pub first_page: u32,
    pub last_page: u32,
    pub pages_loaded: u32,
    pub end_of_data: bool,
    pub harvested_utc: String,
    pub items: Vec<ExportedItem>,
}

/// Creates `dir` if needed and checks that files can be created in it.
pub fn ensure_output_dir(dir: &Path) -> Result<(), ExportError> {
    let unusable = |reason: String| ExportError::OutputDir {
        path: dir.to_path_buf(),
        reason,
    };
    if dir.exists() && !dir.is_dir() {
        return Err(unusable("not a directory".to_string()));
    }
    fs::create_dir_all(dir).map_err(|err| unusable(err.to_string()))?;
    NamedTempFile::new_in(dir).map_err(|err| unusable(err.to_string()))?;
    Ok(())
}

/// Writes `listing.json` into `dir`, replacing any previous export atomically.
pub fn write_listing_export(dir: &Path, export: &ListingExport) -> Result<PathBuf, ExportError> {
    ensure_output_dir(dir)?;
    let body = serde_json::to_vec_pretty(export)?;

    let target = dir.join(LISTING_FILENAME);
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(&body)?;
    staged.as_file_mut().sync_all()?;
    staged
        .persist(&target)
        .map_err(|err| ExportError::Io(err.error))?;
    Ok(target)
}
