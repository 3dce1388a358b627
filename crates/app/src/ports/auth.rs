//! Auth port — the external credential collaborator.
//!
//! Credentials live in deployment configuration, never in source. The HTTP
//! adapter calls this port on login and keeps the resulting [`User`] in its
//! request-scoped session; the application core only ever sees the user as
//! an opaque capability.

use std::future::Future;
use std::sync::Arc;

use nightlamp_domain::user::User;

/// Verifies a username/password pair against the configured table.
pub trait Authenticator: Send + Sync {
    /// Returns the matching [`User`] or `None` when the pair is wrong.
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Option<User>> + Send;
}

impl<T: Authenticator> Authenticator for Arc<T> {
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Option<User>> + Send {
        (**self).authenticate(username, password)
    }
}
