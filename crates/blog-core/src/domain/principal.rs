//! The caller's resolved identity.
//!
//! A principal is produced by the authentication boundary and handed to use
//! cases as-is. Use cases only ask it questions; they never inspect which
//! concrete variant they were given.

use std::fmt::Debug;

use uuid::Uuid;

use crate::ports::TokenClaims;

/// Authorization context for one request.
pub trait Principal: Debug + Send + Sync {
    /// Whether the caller proved an identity.
    fn is_authenticated(&self) -> bool;

    /// The caller's user ID, if authenticated.
    fn user_id(&self) -> Option<Uuid>;

    /// Whether the caller holds the given role.
    fn has_role(&self, role: &str) -> bool;
}

/// A caller with no credentials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anonymous;

impl Principal for Anonymous {
    fn is_authenticated(&self) -> bool {
        false
    }

    fn user_id(&self) -> Option<Uuid> {
        None
    }

    fn has_role(&self, _role: &str) -> bool {
        false
    }
}

/// A caller whose bearer token was validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn new(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            roles: Vec::new(),
        }
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }
}

impl Principal for AuthenticatedUser {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn user_id(&self) -> Option<Uuid> {
        Some(self.user_id)
    }

    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            roles: claims.roles,
        }
    }
}
