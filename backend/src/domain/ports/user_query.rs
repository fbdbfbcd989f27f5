//! Driving port for user lookups.

use async_trait::async_trait;

use crate::domain::{Error, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Fetch a user by raw identifier text.
    ///
    /// Blank input is an invalid request; an identifier that names no user,
    /// including one that is not a UUID, is a not-found error.
    async fn get_user(&self, id: &str) -> Result<User, Error>;
}
