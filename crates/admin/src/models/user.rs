//! Registered app users.

use atadiesel_core::{Email, EmailError, UserId, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("name is required")]
    MissingName,
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// A user as managed from the back-office.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Create or replace payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl UserForm {
    /// Validate the form into a user record.
    ///
    /// # Errors
    ///
    /// Returns [`UserError`] for a blank name or a malformed email.
    pub fn into_user(self, id: UserId, created_at: DateTime<Utc>) -> Result<User, UserError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UserError::MissingName);
        }
        let email = Email::parse(&self.email)?;

        Ok(User {
            id,
            name: name.to_string(),
            email,
            phone: self.phone.trim().to_string(),
            role: self.role,
            active: self.active,
            created_at,
        })
    }
}
