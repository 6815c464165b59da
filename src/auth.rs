//! Authentication seam.
//!
//! Credential verification is delegated to an external identity provider;
//! this module only owns the boundary types. A failed sign-in surfaces to
//! the UI as a blocking alert, with no retry and no backoff.

use thiserror::Error;
use uuid::Uuid;

/// What the user typed into the sign-in form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A successful sign-in: the provider's opaque token plus the identity it
/// vouched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
}

impl Session {
    /// Issue a session for a verified identity.
    pub fn issue(email: impl Into<String>) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            email: email.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("identity provider error: {0}")]
    Provider(String),
}

/// The opaque external collaborator verifying credentials.
pub trait IdentityProvider {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}
