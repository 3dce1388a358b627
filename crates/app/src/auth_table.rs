//! In-process credential table.
//!
//! The table is *supplied* by deployment configuration — the binary reads
//! it from its config file and hands it over here, so no credential ever
//! lives in source code. Comparison is plaintext; hashing and rotation are
//! explicitly out of scope.

use std::future::Future;

use nightlamp_domain::user::User;

use crate::ports::Authenticator;

/// [`Authenticator`] backed by a fixed in-memory table.
pub struct TableAuthenticator {
    entries: Vec<(User, String)>,
}

impl TableAuthenticator {
    /// Build a table from `(user, password)` pairs.
    #[must_use]
    pub fn new(entries: Vec<(User, String)>) -> Self {
        Self { entries }
    }

    /// Number of configured users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (nobody can log in).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Authenticator for TableAuthenticator {
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Option<User>> + Send {
        let user = self
            .entries
            .iter()
            .find(|(user, stored)| user.username == username && stored == password)
            .map(|(user, _)| user.clone());
        async move { user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightlamp_domain::user::Role;

    fn table() -> TableAuthenticator {
        TableAuthenticator::new(vec![
            (User::new("admin", Role::Admin), "s3cret".to_string()),
            (User::new("viewer", Role::User), "123".to_string()),
        ])
    }

    #[tokio::test]
    async fn should_accept_matching_credentials() {
        let user = table().authenticate("admin", "s3cret").await.unwrap();
        assert!(user.is_admin());
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        assert!(table().authenticate("admin", "wrong").await.is_none());
    }

    #[tokio::test]
    async fn should_reject_unknown_username() {
        assert!(table().authenticate("ghost", "s3cret").await.is_none());
    }

    #[tokio::test]
    async fn should_reject_everyone_when_table_empty() {
        let empty = TableAuthenticator::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.authenticate("admin", "s3cret").await.is_none());
    }
}
