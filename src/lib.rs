#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod extractor;
pub mod helpers;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;

use anyhow::Result;

use cli::Cli;
use output::Output;

pub use error::ExtractError;
pub use extractor::{ExtractorConfig, MalformedLinePolicy};
pub use models::{Outcome, Status};

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.extractor_config();
    let output = Output::new();

    if let Some(dir) = cli.dir.as_deref() {
        let outcomes = commands::batch::run(dir, &config);
        return output.outcomes(&outcomes);
    }

    let outcome = commands::extract::run(cli.file.as_deref(), &config);
    output.outcome(&outcome)
}
