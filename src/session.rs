//! Authenticated session context.
//!
//! Replaces the ad hoc global token holder of earlier client revisions: one
//! `Session` is created at login, passed read-only to the collaborators, and
//! dropped at logout. Token acquisition and expiry are handled by the
//! external auth flow.

/// Read-only handle on the backend endpoint and the caller's credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    base_url: String,
    token: String,
}

impl Session {
    /// `base_url` must not end with a slash; the token is an opaque bearer
    /// string supplied by the auth collaborator.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bearer_token(&self) -> &str {
        &self.token
    }
}
