//! Log line formatting.
//!
//! Every entry is a single line:
//!
//! ```text
//! [Thu, 21 Dec 2023 16:01:07 +0200] [warning] --- disk low
//! ```
//!
//! The format is stable; readers and external tooling parse it, so it must
//! be reproduced byte for byte.

use chrono::Local;

/// Timestamp format of a log line, `Thu, 21 Dec 2023 16:01:07 +0200` style.
///
/// Day and month names are always English, the offset has no colon.
pub const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Returns the current local time formatted for a log line.
#[must_use]
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Formats one complete log line, newline included.
///
/// `message` is written as-is: callers logging content that may contain
/// newlines must flatten it first (see [`strip_newlines`]), otherwise the
/// one-entry-per-line format is lost.
#[must_use]
pub fn format_line(label: &str, message: &str) -> String {
    format!("[{}] [{}] --- {}\n", timestamp(), label, message)
}

/// Removes `\n` and `\r` from `message`, for logging multi-line content as
/// a single entry.
#[must_use]
pub fn strip_newlines(message: &str) -> String {
    message.replace(['\n', '\r'], "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use proptest::prelude::*;

    fn timestamp_of(line: &str) -> &str {
        let end = line.find("] [").expect("line has two bracketed fields");
        &line[1..end]
    }

    #[test]
    fn line_has_the_expected_shape() {
        let line = format_line("warning", "disk low");
        assert!(line.starts_with('['));
        assert!(line.contains("] [warning] --- disk low"));
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn timestamp_parses_back() {
        let ts = timestamp();
        let parsed = DateTime::parse_from_str(&ts, TIMESTAMP_FORMAT);
        assert!(parsed.is_ok(), "unparseable timestamp: {ts}");
    }

    #[test]
    fn timestamp_day_is_zero_padded() {
        // "%d" pads with zero, so the field layout never shifts.
        let ts = timestamp();
        let day = ts.split(' ').nth(1).unwrap();
        assert_eq!(day.len(), 2, "day field was {day:?} in {ts}");
    }

    #[test]
    fn strip_newlines_flattens() {
        assert_eq!(strip_newlines("a\nb\r\nc"), "abc");
        assert_eq!(strip_newlines("no newlines"), "no newlines");
        assert_eq!(strip_newlines(""), "");
    }

    proptest! {
        #[test]
        fn formatted_lines_are_single_lines(message in "[ -~]{0,120}") {
            let line = format_line("debug", &message);
            prop_assert!(line.ends_with('\n'));
            prop_assert_eq!(line.matches('\n').count(), 1);
            let expected_tail = format!("--- {}\n", message);
            prop_assert!(line.ends_with(&expected_tail));
        }

        #[test]
        fn embedded_timestamp_always_parses(message in "[ -~]{0,40}") {
            let line = format_line("notice", &message);
            let ts = timestamp_of(&line);
            prop_assert!(DateTime::parse_from_str(ts, TIMESTAMP_FORMAT).is_ok());
        }
    }
}
