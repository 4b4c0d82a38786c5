//! # caplog
//!
//! Size-capped, per-user, leveled log files.
//!
//! `caplog` appends timestamped lines to one `log.txt` per user, filters
//! them by a configured verbosity environment, and keeps every file below
//! a byte cap by truncating and rewriting it in place; there is never a
//! rotated sibling file to clean up.
//!
//! ## Design Principles
//!
//! - One log file per user under a common root; anonymous sessions share
//!   a sentinel directory
//! - Filtering is decided before any filesystem work happens
//! - Appends and rotation are serialized by an exclusive file lock, so
//!   lines land whole even under cross-process contention
//! - The environment and the current user come from host-provided sources,
//!   re-read on every call; an unavailable environment fails open to
//!   production
//!
//! ## Environments
//!
//! - [`Environment::Development`] records all four severities
//! - [`Environment::Production`] records only errors and warnings
//! - [`Environment::Silent`] records nothing
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use caplog::{Environment, FixedEnvironment, FixedUser, LogConfig, Logger};
//!
//! let logger = Logger::new(
//!     LogConfig::new().users_root("/srv/app/users"),
//!     Arc::new(FixedEnvironment(Environment::Production)),
//!     Arc::new(FixedUser::new("alice")),
//! );
//!
//! logger.error("upstream unreachable")?;
//! logger.debug("ignored in production")?;
//! # Ok::<(), caplog::LogError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod environment;
mod error;
mod filter;
mod line;
mod logger;
mod severity;
mod source;
mod writer;

pub use config::{LogConfig, DEFAULT_MAX_FILE_SIZE, LOG_FILE_NAME, NO_USER_DIR};
pub use environment::Environment;
pub use error::{LogError, LogResult};
pub use filter::{should_record, should_record_weight};
pub use line::{format_line, strip_newlines, timestamp, TIMESTAMP_FORMAT};
pub use logger::Logger;
pub use severity::{label_for_weight, Severity, UNKNOWN_LABEL};
pub use source::{
    EnvironmentSource, FixedEnvironment, FixedUser, NoEnvironment, NoUser, UserSource,
};
pub use writer::{LogFile, ROTATION_MESSAGE};
