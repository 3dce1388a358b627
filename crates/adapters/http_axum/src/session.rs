//! In-process session tokens.
//!
//! A session is an opaque random token mapped to the authenticated
//! [`User`]. Tokens travel in a cookie; the map lives in process memory, so
//! sessions end when the daemon restarts. That is the whole design —
//! session persistence and expiry are out of scope.

use std::collections::HashMap;
use std::sync::Mutex;

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use uuid::Uuid;

use nightlamp_domain::user::User;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "nightlamp_session";

/// Token → user map shared across handlers.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, User>>,
}

impl SessionStore {
    /// Start a session for `user`, returning the new token.
    pub fn insert(&self, user: User) -> Uuid {
        let token = Uuid::new_v4();
        self.lock().insert(token, user);
        token
    }

    /// Look up the user behind `token`.
    #[must_use]
    pub fn get(&self, token: Uuid) -> Option<User> {
        self.lock().get(&token).cloned()
    }

    /// End the session behind `token`.
    pub fn remove(&self, token: Uuid) {
        self.lock().remove(&token);
    }

    /// Resolve the user making a request from its `Cookie` header.
    #[must_use]
    pub fn user_from_headers(&self, headers: &HeaderMap) -> Option<User> {
        let token = token_from_headers(headers)?;
        self.get(token)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, User>> {
        self.sessions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Extract the session token from a request's `Cookie` header, if any.
#[must_use]
pub fn token_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE)
            .then(|| value.parse().ok())
            .flatten()
    })
}

/// `Set-Cookie` value installing a session token.
#[must_use]
pub fn session_cookie(token: Uuid) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value clearing the session cookie.
#[must_use]
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
