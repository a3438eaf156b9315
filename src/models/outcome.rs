use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Message reported when the binary is invoked without a file.
pub const NO_FILE_MESSAGE: &str = "No file provided";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, AsRefStr, EnumString)]
pub enum Status {
    Success,
    NotFound,
    Error,
}

/// The single record produced for one input file.
///
/// `file` and `s11_max` are present for `Success` and `NotFound`; `message`
/// is present only for `Error`. Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    s11_max: Option<f64>,
    status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Outcome {
    pub fn success(file: impl Into<String>, s11_max: f64) -> Self {
        Self {
            file: Some(file.into()),
            s11_max: Some(s11_max),
            status: Status::Success,
            message: None,
        }
    }

    pub fn not_found(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            s11_max: Some(0.0),
            status: Status::NotFound,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            file: None,
            s11_max: None,
            status: Status::Error,
            message: Some(message.into()),
        }
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn s11_max(&self) -> Option<f64> {
        self.s11_max
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Serialize as a single-line JSON object.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn success_serializes_in_key_order() {
        let json = Outcome::success("run.log", 546.3).to_json_line().unwrap();
        assert_eq!(
            json,
            r#"{"file":"run.log","s11_max":546.3,"status":"Success"}"#
        );
    }

    // NotFound keeps the 0.0 default rather than dropping the key.
    #[rstest]
    fn not_found_reports_zero() {
        let json = Outcome::not_found("run.log").to_json_line().unwrap();
        assert_eq!(
            json,
            r#"{"file":"run.log","s11_max":0.0,"status":"NotFound"}"#
        );
    }

    #[rstest]
    fn error_omits_file_and_value() {
        let json = Outcome::error(NO_FILE_MESSAGE).to_json_line().unwrap();
        assert_eq!(json, r#"{"status":"Error","message":"No file provided"}"#);
    }

    #[rstest]
    #[case::success("Success", Status::Success)]
    #[case::not_found("NotFound", Status::NotFound)]
    #[case::error("Error", Status::Error)]
    fn status_tags_match_wire_names(#[case] tag: &str, #[case] status: Status) {
        assert_eq!(status.as_ref(), tag);
        assert_eq!(Status::from_str(tag).unwrap(), status);
    }

    // Consumers deserialize the line back; missing keys must not break that.
    #[rstest]
    fn error_line_deserializes() {
        let outcome: Outcome =
            serde_json::from_str(r#"{"status":"Error","message":"boom"}"#).unwrap();
        assert_eq!(outcome.status(), Status::Error);
        assert_eq!(outcome.message(), Some("boom"));
        assert!(outcome.file().is_none());
        assert!(outcome.s11_max().is_none());
    }
}
