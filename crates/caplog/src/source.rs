//! Collaborator seams.
//!
//! The logger does not own configuration or session state; it reads both
//! through these traits. The host application wires its own configuration
//! and identity subsystems in; tests wire in the fixed implementations
//! below.

use crate::environment::Environment;

/// Supplies the deployment environment.
///
/// # Failure
///
/// Returning `None` means the configuration is unavailable. The logger
/// fails open to [`Environment::Production`] and never surfaces the
/// failure.
pub trait EnvironmentSource: Send + Sync {
    /// Returns the current environment, or `None` if it cannot be resolved.
    fn environment(&self) -> Option<Environment>;
}

/// Supplies the current username for per-user log routing.
pub trait UserSource: Send + Sync {
    /// Returns the current username.
    ///
    /// `None` (or an empty string) means no user is signed in; such
    /// messages land in the shared sentinel directory.
    fn current_user(&self) -> Option<String>;
}

/// An [`EnvironmentSource`] that always reports the same environment.
#[derive(Debug, Clone, Copy)]
pub struct FixedEnvironment(pub Environment);

impl EnvironmentSource for FixedEnvironment {
    fn environment(&self) -> Option<Environment> {
        Some(self.0)
    }
}

/// An [`EnvironmentSource`] whose configuration is never available.
///
/// Exercises the fail-open path: the logger behaves as in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnvironment;

impl EnvironmentSource for NoEnvironment {
    fn environment(&self) -> Option<Environment> {
        None
    }
}

/// A [`UserSource`] that always reports the same username.
#[derive(Debug, Clone)]
pub struct FixedUser(String);

impl FixedUser {
    /// Creates a source reporting `name` as the current user.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl UserSource for FixedUser {
    fn current_user(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// A [`UserSource`] with no signed-in user.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUser;

impl UserSource for NoUser {
    fn current_user(&self) -> Option<String> {
        None
    }
}
