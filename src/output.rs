use anyhow::{Context, Result};
use console::Term;

use crate::models::Outcome;

/// Writes outcomes to stdout, one JSON object per line.
pub struct Output {
    term: Term,
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn outcome(&self, outcome: &Outcome) -> Result<()> {
        let line = outcome
            .to_json_line()
            .context("Failed to serialize outcome")?;
        self.term
            .write_line(&line)
            .context("Failed to write outcome to stdout")?;
        Ok(())
    }

    pub fn outcomes(&self, outcomes: &[Outcome]) -> Result<()> {
        for outcome in outcomes {
            self.outcome(outcome)?;
        }
        Ok(())
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
