//! Verbosity gating.
//!
//! Decides whether a message should be recorded at all, given the deployment
//! environment and the message severity. Pure functions of their inputs; the
//! rest of the crate never writes a byte for a suppressed message.

use crate::environment::Environment;
use crate::severity::Severity;

/// Returns whether a message of `severity` should be recorded under `env`.
///
/// Rules, in order:
/// 1. [`Environment::Silent`] suppresses everything.
/// 2. [`Environment::Production`] suppresses notice and debug.
/// 3. Everything else is recorded.
#[must_use]
pub fn should_record(env: Environment, severity: Severity) -> bool {
    match env {
        Environment::Silent => false,
        Environment::Production => severity < Severity::Notice,
        Environment::Development => true,
    }
}

/// Returns whether a message with the given numeric weight should be
/// recorded under `env`.
///
/// Known weights delegate to [`should_record`]. Weights outside the known
/// set bypass the production threshold and are always recorded; only
/// [`Environment::Silent`], which suppresses everything, still drops them.
#[must_use]
pub fn should_record_weight(env: Environment, weight: u8) -> bool {
    match Severity::from_weight(weight) {
        Some(severity) => should_record(env, severity),
        None => env != Environment::Silent,
    }
}
