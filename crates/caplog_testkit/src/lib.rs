//! # caplog Testkit
//!
//! Test utilities for caplog.
//!
//! This crate provides:
//! - Temporary per-user directory fixtures
//! - Property-based test generators using proptest
//! - Golden log-line parsing for format verification
//! - Concurrent-append stress harnesses
//!
//! ## Usage
//!
//! ```rust,ignore
//! use caplog_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_users() {
//!     let users = UsersDir::new(&["alice"]);
//!     let logger = users.logger(Environment::Development, "alice");
//!     // ... test operations
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod golden;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::golden::*;
    pub use crate::stress::*;
}

pub use fixtures::*;
pub use generators::*;
pub use golden::*;
pub use stress::*;
