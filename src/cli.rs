use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};

use crate::extractor::{ExtractorConfig, MalformedLinePolicy};
use crate::parser::S11_MARKER;

#[derive(Debug, Parser)]
#[command(name = "s11")]
#[command(about = "Extract the S11 max tensile stress from simulation logs as JSON", long_about = None)]
pub struct Cli {
    /// Log file to scan
    #[arg(conflicts_with = "dir")]
    pub file: Option<PathBuf>,

    /// Anything after the file is accepted and ignored, dashes included
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Scan every *.log file in this directory, one JSON line per file
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Report a marker line without '=' as an error instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Label text that identifies the value line
    #[arg(long, default_value = S11_MARKER, value_parser = NonEmptyStringValueParser::new())]
    pub marker: String,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn extractor_config(&self) -> ExtractorConfig {
        let policy = if self.strict {
            MalformedLinePolicy::Fail
        } else {
            MalformedLinePolicy::Skip
        };
        ExtractorConfig::new(self.marker.clone(), policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn no_arguments_parse() {
        let cli = Cli::try_parse_from(["s11"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.dir.is_none());
        assert_eq!(cli.extractor_config(), ExtractorConfig::default());
    }

    // Only the first positional is the file; the rest are ignored.
    #[rstest]
    fn extra_positionals_are_ignored() {
        let cli = Cli::try_parse_from(["s11", "a.log", "b.log", "c.log"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("a.log")));
        assert_eq!(cli.ignored, vec!["b.log", "c.log"]);
    }

    // Unknown dashed words after the file are swallowed rather than rejected.
    #[rstest]
    #[case::long(&["s11", "a.log", "--extra"], &["--extra"])]
    #[case::short_with_value(&["s11", "a.log", "-x", "y"], &["-x", "y"])]
    #[case::mixed(&["s11", "a.log", "b.log", "--extra", "-x"], &["b.log", "--extra", "-x"])]
    fn dashed_extras_are_ignored(#[case] args: &[&str], #[case] expected: &[&str]) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("a.log")));
        assert_eq!(cli.ignored, expected);
    }

    #[rstest]
    fn strict_and_marker_build_config() {
        let cli = Cli::try_parse_from(["s11", "--strict", "--marker", "Model S22", "a.log"]).unwrap();
        let config = cli.extractor_config();
        assert_eq!(config.marker(), "Model S22");
        assert_eq!(config.malformed(), MalformedLinePolicy::Fail);
    }

    #[rstest]
    #[case::dir_and_file(&["s11", "--dir", "logs", "a.log"])]
    #[case::empty_marker(&["s11", "--marker", "", "a.log"])]
    fn rejects_invalid_combinations(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[rstest]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["s11", "-vv", "a.log"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
