use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::ExtractError;
use crate::helpers::suggest_sibling;
use crate::models::Outcome;
use crate::parser::{self, LineValue, S11_MARKER};

/// What to do with a marker line that has no `=` after the label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Ignore the line and keep scanning.
    #[default]
    Skip,
    /// Report the line as an error.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    marker: String,
    malformed: MalformedLinePolicy,
}

impl ExtractorConfig {
    pub fn new(marker: impl Into<String>, malformed: MalformedLinePolicy) -> Self {
        Self {
            marker: marker.into(),
            malformed,
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn malformed(&self) -> MalformedLinePolicy {
        self.malformed
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new(S11_MARKER, MalformedLinePolicy::default())
    }
}

/// Scan `reader` line by line for the first usable marker line.
///
/// Returns `Ok(None)` when the input ends without a match. `path` is only
/// used to label read errors.
pub fn scan_lines<R: BufRead>(
    reader: R,
    path: &str,
    config: &ExtractorConfig,
) -> Result<Option<f64>, ExtractError> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ExtractError::from_io(path, e))?;
        let line_no = idx + 1;

        let Some(rest) = parser::after_marker(&line, config.marker()) else {
            continue;
        };
        trace!(line = line_no, "marker found");

        match parser::read_value(rest) {
            LineValue::Value(value) => {
                debug!(line = line_no, value, "extracted value");
                return Ok(Some(value));
            }
            LineValue::MissingAssignment => match config.malformed() {
                MalformedLinePolicy::Skip => {
                    debug!(line = line_no, "skipping marker line without '='");
                }
                MalformedLinePolicy::Fail => {
                    return Err(ExtractError::MalformedLine { line: line_no });
                }
            },
            LineValue::NotNumeric(text) => {
                return Err(ExtractError::NumericParse {
                    line: line_no,
                    text: text.to_owned(),
                });
            }
        }
    }

    Ok(None)
}

/// Open `path` and scan it. The file handle is dropped on every return path.
pub fn extract_file(path: &Path, config: &ExtractorConfig) -> Result<Option<f64>, ExtractError> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|e| match ExtractError::from_io(&display, e) {
        ExtractError::FileNotFound { path: missing, .. } => ExtractError::FileNotFound {
            path: missing,
            suggestion: suggest_sibling(path),
        },
        other => other,
    })?;

    scan_lines(BufReader::new(file), &display, config)
}

/// Run the extractor on `path` and fold the result into an [`Outcome`].
pub fn outcome_for(path: &Path, config: &ExtractorConfig) -> Outcome {
    let file = path.display().to_string();

    let outcome = match extract_file(path, config) {
        Ok(Some(value)) => Outcome::success(file.as_str(), value),
        Ok(None) => Outcome::not_found(file.as_str()),
        Err(err) => {
            warn!(file = %file, kind = err.kind(), error = %err, "extraction failed");
            Outcome::error(err.to_string())
        }
    };

    debug!(file = %file, status = outcome.status().as_ref(), "outcome ready");
    outcome
}
