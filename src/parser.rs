//! Value extraction for a single log line.
//!
//! A conforming line looks like
//! `   Model S11 Max (Tensile)    = 546.3 ------>>  [  OK  ]`:
//! the label, an `=`, the numeric literal, then a trailing annotation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Label that identifies the tensile S11 max line.
pub const S11_MARKER: &str = "Model S11 Max (Tensile)";

/// Text following the first `=`, up to the next whitespace.
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^=]*=\s*(?P<raw>\S*)").expect("Invalid regex pattern")
});

/// A decimal floating-point literal anchored at the start of the text.
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("Invalid regex pattern")
});

/// What a marker line yields once the label has been located.
#[derive(Debug, Clone, PartialEq)]
pub enum LineValue<'a> {
    Value(f64),
    /// No `=` after the label.
    MissingAssignment,
    /// An `=` was found but no number follows it.
    NotNumeric(&'a str),
}

/// Locate `marker` in `line` and return the text that follows it.
pub fn after_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker).map(|idx| &line[idx + marker.len()..])
}

/// Read the value assigned after the label.
///
/// `rest` is the remainder of the line after the marker. Literals that
/// overflow `f64` count as not numeric.
pub fn read_value(rest: &str) -> LineValue<'_> {
    let Some(raw) = ASSIGNMENT.captures(rest).and_then(|caps| caps.name("raw")) else {
        return LineValue::MissingAssignment;
    };
    let raw = raw.as_str();

    NUMBER
        .find(raw)
        .and_then(|literal| literal.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map_or(LineValue::NotNumeric(raw), LineValue::Value)
}
