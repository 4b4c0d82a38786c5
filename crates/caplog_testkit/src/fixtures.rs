//! Test fixtures and per-user directory helpers.
//!
//! Provides convenience functions for setting up temporary users roots
//! and loggers wired to them.

use caplog::{Environment, FixedEnvironment, FixedUser, LogConfig, LogFile, Logger, NoUser};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A temporary users root with automatic cleanup.
///
/// Holds the `TempDir` alive for as long as the fixture lives, so every
/// path handed out stays valid for the duration of the test.
pub struct UsersDir {
    root: TempDir,
}

impl UsersDir {
    /// Creates a users root containing a directory for each named user.
    pub fn new(users: &[&str]) -> Self {
        let root = TempDir::new().expect("Failed to create temp users root");
        let dir = Self { root };
        for name in users {
            dir.add_user(name);
        }
        dir
    }

    /// Creates a users root with no user directories at all.
    pub fn empty() -> Self {
        Self::new(&[])
    }

    /// Returns the root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a user directory after construction.
    pub fn add_user(&self, name: &str) {
        fs::create_dir_all(self.root.path().join(name)).expect("Failed to create user directory");
    }

    /// Returns a configuration rooted here, default size cap.
    pub fn config(&self) -> LogConfig {
        LogConfig::new().users_root(self.root.path())
    }

    /// Returns the log file path for `name`, following the library's layout.
    pub fn log_path(&self, name: &str) -> PathBuf {
        self.config().log_path_for(Some(name))
    }

    /// Builds a logger with a fixed environment and user.
    pub fn logger(&self, env: Environment, user: &str) -> Logger {
        Logger::new(
            self.config(),
            Arc::new(FixedEnvironment(env)),
            Arc::new(FixedUser::new(user)),
        )
    }

    /// Builds a logger with a fixed environment and no current user.
    pub fn anonymous_logger(&self, env: Environment) -> Logger {
        Logger::new(self.config(), Arc::new(FixedEnvironment(env)), Arc::new(NoUser))
    }

    /// Returns a capped [`LogFile`] over a user's log for writer-level tests.
    pub fn log_file(&self, name: &str, max_size: u64) -> LogFile {
        LogFile::new(self.log_path(name), max_size)
    }

    /// Replaces a user's log content with `bytes` bytes of filler.
    pub fn prefill(&self, name: &str, bytes: usize) {
        fs::write(self.log_path(name), vec![b'x'; bytes]).expect("Failed to prefill log file");
    }

    /// Reads the full content of a user's log file.
    pub fn read_log(&self, name: &str) -> String {
        fs::read_to_string(self.log_path(name)).expect("Failed to read log file")
    }

    /// Returns whether a user's log file exists at all.
    pub fn log_exists(&self, name: &str) -> bool {
        self.log_path(name).exists()
    }
}

impl std::ops::Deref for UsersDir {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.root.path()
    }
}
