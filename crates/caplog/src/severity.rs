//! Message severities.

use std::fmt;

/// Label used for weights outside the four known severities.
///
/// Messages recorded with such a weight are still written; see
/// [`crate::Logger::record_weight`].
pub const UNKNOWN_LABEL: &str = "unknown";

/// Severity of a log message.
///
/// The numeric weights are part of the on-disk and API contract: they grow
/// with verbosity, so the derived ordering is by verbosity, not by
/// importance, and `Severity::Error < Severity::Debug`. Threshold checks
/// like "notice or chattier" read as `severity >= Severity::Notice`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Blocking application errors.
    Error = 2,
    /// Problems that degrade but do not block operation.
    Warning = 4,
    /// Minor issues and informational messages.
    Notice = 8,
    /// Diagnostic output for debugging.
    Debug = 16,
}

impl Severity {
    /// All severities, from least to most verbose.
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Debug,
    ];

    /// Returns the numeric weight of this severity.
    #[must_use]
    pub const fn weight(self) -> u8 {
        self as u8
    }

    /// Returns the severity for a numeric weight, if it is one of the
    /// four known values.
    #[must_use]
    pub const fn from_weight(weight: u8) -> Option<Self> {
        match weight {
            2 => Some(Severity::Error),
            4 => Some(Severity::Warning),
            8 => Some(Severity::Notice),
            16 => Some(Severity::Debug),
            _ => None,
        }
    }

    /// Returns the label written between brackets in a log line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Debug => "debug",
        }
    }
}

/// Returns the log-line label for a numeric weight.
///
/// Weights outside the known set map to [`UNKNOWN_LABEL`].
#[must_use]
pub fn label_for_weight(weight: u8) -> &'static str {
    match Severity::from_weight(weight) {
        Some(severity) => severity.label(),
        None => UNKNOWN_LABEL,
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
