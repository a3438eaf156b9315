use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExtractError;
use crate::extractor::{ExtractorConfig, outcome_for};
use crate::models::Outcome;

const LOG_EXTENSION: &str = "log";

/// Lists the `*.log` files directly inside `dir`, sorted by file name.
pub fn log_files(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let display = dir.display().to_string();
    let entries = fs::read_dir(dir).map_err(|e| ExtractError::from_io(&display, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ExtractError::from_io(&display, e))?.path();
        let is_log = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(LOG_EXTENSION));
        if is_log && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Extracts every log file in `dir`, one outcome per file.
///
/// A directory that cannot be listed yields a single error outcome.
pub fn run(dir: &Path, config: &ExtractorConfig) -> Vec<Outcome> {
    let files = match log_files(dir) {
        Ok(files) => files,
        Err(err) => return vec![Outcome::error(err.to_string())],
    };

    info!(dir = %dir.display(), count = files.len(), "scanning log directory");
    files.iter().map(|path| outcome_for(path, config)).collect()
}
