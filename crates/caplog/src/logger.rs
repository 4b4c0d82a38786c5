//! Record orchestration: filtering, line assembly, and dispatch to disk.

use std::path::Path;
use std::sync::Arc;

use crate::config::LogConfig;
use crate::environment::Environment;
use crate::error::LogResult;
use crate::filter;
use crate::line;
use crate::severity::{self, Severity};
use crate::source::{EnvironmentSource, UserSource};
use crate::writer::LogFile;

/// A leveled logger writing to per-user log files.
///
/// Each call resolves the verbosity environment and the current user through
/// the configured sources, so both may change between calls without
/// rebuilding the logger. Suppressed messages return `Ok(())` without
/// touching the filesystem or consulting the identity source at all.
///
/// An unavailable environment fails open to [`Environment::Production`]:
/// errors and warnings still reach disk while a host application is
/// bootstrapping its configuration.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use caplog::{Environment, FixedEnvironment, FixedUser, LogConfig, Logger};
///
/// let logger = Logger::new(
///     LogConfig::new().users_root("/srv/app/users"),
///     Arc::new(FixedEnvironment(Environment::Production)),
///     Arc::new(FixedUser::new("alice")),
/// );
/// logger.warning("disk space low")?;
/// # Ok::<(), caplog::LogError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    config: LogConfig,
    environment: Arc<dyn EnvironmentSource>,
    identity: Arc<dyn UserSource>,
}

impl Logger {
    /// Creates a logger over the given configuration and sources.
    pub fn new(
        config: LogConfig,
        environment: Arc<dyn EnvironmentSource>,
        identity: Arc<dyn UserSource>,
    ) -> Self {
        Self {
            config,
            environment,
            identity,
        }
    }

    /// Returns the logger's configuration.
    #[must_use]
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Records a message at the given severity in the current user's log.
    ///
    /// The message is written as-is; content that may contain newlines
    /// should go through [`record_dump`](Self::record_dump) or
    /// [`strip_newlines`](crate::strip_newlines) first.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::PermissionDenied`](crate::LogError) if the log
    /// file cannot be written. Suppression by the environment is not an
    /// error.
    pub fn record(&self, severity: Severity, message: &str) -> LogResult<()> {
        self.write(severity.weight(), message, None)
    }

    /// Records a message in an explicitly named log file instead of the
    /// current user's.
    ///
    /// Filtering applies exactly as in [`record`](Self::record); only the
    /// destination changes.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::PermissionDenied`](crate::LogError) if `path`
    /// cannot be written.
    pub fn record_to(
        &self,
        severity: Severity,
        message: &str,
        path: impl AsRef<Path>,
    ) -> LogResult<()> {
        self.write(severity.weight(), message, Some(path.as_ref()))
    }

    /// Records a message by numeric severity weight.
    ///
    /// Weights outside the four known ones are labeled `unknown` and are
    /// never filtered by the production threshold; the silent environment
    /// still suppresses them.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::PermissionDenied`](crate::LogError) if the log
    /// file cannot be written.
    pub fn record_weight(&self, weight: u8, message: &str) -> LogResult<()> {
        self.write(weight, message, None)
    }

    /// Records a multi-line payload as a single debug line.
    ///
    /// Newlines and carriage returns in `content` are stripped so the
    /// payload cannot masquerade as log lines of its own. The line reads
    /// `<label>: <flattened content>`. Debug severity means production
    /// environments drop dumps.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::PermissionDenied`](crate::LogError) if the log
    /// file cannot be written.
    pub fn record_dump(&self, label: &str, content: &str) -> LogResult<()> {
        let message = format!("{label}: {}", line::strip_newlines(content));
        self.record(Severity::Debug, &message)
    }

    /// Records an error message.
    ///
    /// # Errors
    ///
    /// See [`record`](Self::record).
    pub fn error(&self, message: &str) -> LogResult<()> {
        self.record(Severity::Error, message)
    }

    /// Records a warning message.
    ///
    /// # Errors
    ///
    /// See [`record`](Self::record).
    pub fn warning(&self, message: &str) -> LogResult<()> {
        self.record(Severity::Warning, message)
    }

    /// Records a notice message.
    ///
    /// # Errors
    ///
    /// See [`record`](Self::record).
    pub fn notice(&self, message: &str) -> LogResult<()> {
        self.record(Severity::Notice, message)
    }

    /// Records a debug message.
    ///
    /// # Errors
    ///
    /// See [`record`](Self::record).
    pub fn debug(&self, message: &str) -> LogResult<()> {
        self.record(Severity::Debug, message)
    }

    fn write(&self, weight: u8, message: &str, target: Option<&Path>) -> LogResult<()> {
        let environment = self
            .environment
            .environment()
            .unwrap_or(Environment::Production);

        if !filter::should_record_weight(environment, weight) {
            tracing::trace!(%environment, weight, "log message suppressed");
            return Ok(());
        }

        let path = match target {
            Some(path) => path.to_path_buf(),
            None => {
                let user = self.identity.current_user();
                self.config.log_path_for(user.as_deref())
            }
        };

        let formatted = line::format_line(severity::label_for_weight(weight), message);
        LogFile::new(path, self.config.max_file_size).append(&formatted)
    }
}
