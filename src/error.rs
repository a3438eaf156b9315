use std::io;

/// Failure kinds surfaced while extracting a value from a log file.
///
/// The `Display` text is what ends up in an error outcome's `message`.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("No such file or directory: '{path}'{}", did_you_mean(.suggestion))]
    FileNotFound {
        path: String,
        suggestion: Option<String>,
    },

    #[error("Permission denied: '{path}'")]
    PermissionDenied { path: String },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed marker line {line}: no '=' after the label")]
    MalformedLine { line: usize },

    #[error("Could not convert value on line {line} to a number: '{text}'")]
    NumericParse { line: usize, text: String },
}

impl ExtractError {
    /// Classify an I/O failure on `path` into the matching error kind.
    pub fn from_io(path: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound {
                path: path.to_owned(),
                suggestion: None,
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_owned(),
            },
            _ => Self::Io {
                path: path.to_owned(),
                source,
            },
        }
    }

    /// Short machine-friendly name of the error kind, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "file_not_found",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::Io { .. } => "io",
            Self::MalformedLine { .. } => "malformed_line",
            Self::NumericParse { .. } => "numeric_parse",
        }
    }
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(candidate) => format!(" (did you mean '{candidate}'?)"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing(io::ErrorKind::NotFound, "file_not_found")]
    #[case::denied(io::ErrorKind::PermissionDenied, "permission_denied")]
    #[case::other(io::ErrorKind::InvalidData, "io")]
    fn from_io_classifies_kind(#[case] kind: io::ErrorKind, #[case] expected: &str) {
        let err = ExtractError::from_io("run.log", io::Error::new(kind, "boom"));
        assert_eq!(err.kind(), expected);
    }

    #[rstest]
    fn not_found_message_includes_suggestion() {
        let err = ExtractError::FileNotFound {
            path: "rn.log".to_string(),
            suggestion: Some("run.log".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "No such file or directory: 'rn.log' (did you mean 'run.log'?)"
        );
    }

    #[rstest]
    fn not_found_message_without_suggestion() {
        let err = ExtractError::from_io("run.log", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.to_string(), "No such file or directory: 'run.log'");
    }
}
