use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Caller identity, supplied by the auth layer on every operation.
///
/// The backend treats the user id as opaque; it never resolves identities
/// itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    User,
    Admin,
}

impl UserContext {
    pub fn new(user_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn user(user_id: impl Into<String>) -> Self {
        Self::new(user_id, UserRole::User)
    }

    pub fn admin(user_id: impl Into<String>) -> Self {
        Self::new(user_id, UserRole::Admin)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Every write path calls this before touching the store.
    pub fn require_authenticated(&self) -> AppResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::Unauthorized(
                "An authenticated user is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn require_admin(&self) -> AppResult<()> {
        self.require_authenticated()?;
        if !self.is_admin() {
            return Err(AppError::Unauthorized(
                "Administrator role is required".to_string(),
            ));
        }
        Ok(())
    }
}
