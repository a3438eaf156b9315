use std::path::Path;

use crate::extractor::{ExtractorConfig, outcome_for};
use crate::models::{NO_FILE_MESSAGE, Outcome};

pub fn run(file: Option<&Path>, config: &ExtractorConfig) -> Outcome {
    match file {
        Some(path) => outcome_for(path, config),
        None => Outcome::error(NO_FILE_MESSAGE),
    }
}
