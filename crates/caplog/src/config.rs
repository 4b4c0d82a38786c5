//! Logger configuration.

use std::path::{Path, PathBuf};

/// Default cap on a log file's size before rotation: 1 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// File name of every per-user log.
pub const LOG_FILE_NAME: &str = "log.txt";

/// Directory name used when there is no current user.
pub const NO_USER_DIR: &str = "_";

/// Configuration for a [`crate::Logger`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Root directory holding one subdirectory per user.
    pub users_root: PathBuf,

    /// Size cap in bytes that triggers rotation. `0` disables rotation;
    /// the file then grows without bound.
    pub max_file_size: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            users_root: PathBuf::from("users"),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl LogConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the users storage root.
    #[must_use]
    pub fn users_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.users_root = root.into();
        self
    }

    /// Sets the rotation size cap. `0` disables rotation.
    #[must_use]
    pub fn max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Resolves the log file path for a user.
    ///
    /// `None` or an empty username means "no current user" and maps to the
    /// [`NO_USER_DIR`] sentinel directory. The parent directory is not
    /// created here; provisioning user directories belongs to the host
    /// application.
    #[must_use]
    pub fn log_path_for(&self, username: Option<&str>) -> PathBuf {
        let dir = match username {
            Some(name) if !name.is_empty() => name,
            _ => NO_USER_DIR,
        };
        self.users_root.join(dir).join(LOG_FILE_NAME)
    }

    /// Returns the users storage root.
    #[must_use]
    pub fn users_root_path(&self) -> &Path {
        &self.users_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LogConfig::default();
        assert_eq!(config.users_root, PathBuf::from("users"));
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn builder_pattern() {
        let config = LogConfig::new()
            .users_root("/srv/data/users")
            .max_file_size(4096);

        assert_eq!(config.users_root, PathBuf::from("/srv/data/users"));
        assert_eq!(config.users_root_path(), Path::new("/srv/data/users"));
        assert_eq!(config.max_file_size, 4096);
    }

    #[test]
    fn path_for_a_named_user() {
        let config = LogConfig::new().users_root("users");
        assert_eq!(
            config.log_path_for(Some("alice")),
            PathBuf::from("users").join("alice").join("log.txt")
        );
    }

    #[test]
    fn missing_user_maps_to_sentinel() {
        let config = LogConfig::new().users_root("users");
        let sentinel = PathBuf::from("users").join("_").join("log.txt");
        assert_eq!(config.log_path_for(None), sentinel);
        assert_eq!(config.log_path_for(Some("")), sentinel);
    }
}
