//! Golden log-line parsing for format verification.
//!
//! Provides a strict parser for the `[timestamp] [label] --- message`
//! line format, so tests can assert on structure instead of substrings.

use caplog::{ROTATION_MESSAGE, TIMESTAMP_FORMAT};
use chrono::{DateTime, FixedOffset};

/// A fully validated log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// The timestamp, parsed back from its formatted form.
    pub timestamp: DateTime<FixedOffset>,
    /// The severity label between the second pair of brackets.
    pub label: String,
    /// Everything after the `---` separator.
    pub message: String,
}

impl ParsedLine {
    /// Whether this is the marker line an in-place rotation writes.
    pub fn is_rotation_marker(&self) -> bool {
        self.label == "notice" && self.message == ROTATION_MESSAGE
    }
}

/// Parses one line (without its trailing newline), validating every part.
///
/// The timestamp is round-tripped through chrono, so a line only passes
/// if its date actually parses under the library's format, weekday
/// consistency included.
pub fn parse_line(raw: &str) -> Result<ParsedLine, String> {
    let rest = raw
        .strip_prefix('[')
        .ok_or_else(|| format!("missing opening bracket: {raw:?}"))?;
    let (ts, rest) = rest
        .split_once("] [")
        .ok_or_else(|| format!("missing timestamp delimiter: {raw:?}"))?;
    let (label, message) = rest
        .split_once("] --- ")
        .ok_or_else(|| format!("missing label delimiter: {raw:?}"))?;
    let timestamp = DateTime::parse_from_str(ts, TIMESTAMP_FORMAT)
        .map_err(|e| format!("bad timestamp {ts:?}: {e}"))?;

    Ok(ParsedLine {
        timestamp,
        label: label.to_string(),
        message: message.to_string(),
    })
}

/// Parses a whole log's content, strict on every line.
pub fn parse_log(content: &str) -> Result<Vec<ParsedLine>, String> {
    content.lines().map(parse_line).collect()
}

/// Parses every well-formed line, counting the ones that fail.
///
/// Rotation may leave a truncated fragment as the first line of a file;
/// this variant lets tests assert "everything parses except N fragments".
pub fn parse_valid_lines(content: &str) -> (Vec<ParsedLine>, usize) {
    let mut parsed = Vec::new();
    let mut rejected = 0usize;
    for line in content.lines() {
        match parse_line(line) {
            Ok(p) => parsed.push(p),
            Err(_) => rejected += 1,
        }
    }
    (parsed, rejected)
}

/// Panics unless every line of `content` is well formed.
pub fn assert_well_formed(content: &str) {
    if let Err(e) = parse_log(content) {
        panic!("malformed log content: {e}");
    }
}
