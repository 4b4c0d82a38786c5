//! Deployment environments.

use std::fmt;

/// Deployment posture controlling log verbosity.
///
/// The environment is supplied by the host application (see
/// [`crate::EnvironmentSource`]); this crate only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Suppress everything. A kill-switch, e.g. for test runs.
    Silent,
    /// Record only errors and warnings.
    Production,
    /// Record all severities. The default for any unrecognized name.
    #[default]
    Development,
}

impl Environment {
    /// Maps a configured environment name to an `Environment`.
    ///
    /// Matching is exact and case-sensitive: `"silent"` and `"production"`
    /// are recognized, every other name means [`Environment::Development`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "silent" => Environment::Silent,
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Returns the canonical name of this environment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Silent => "silent",
            Environment::Production => "production",
            Environment::Development => "development",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
