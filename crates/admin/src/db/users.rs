//! User table operations.

use atadiesel_core::{Email, UserId};

use super::{Database, RepositoryError};
use crate::models::User;

/// Repository for app users.
pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all users in registration order.
    pub async fn list_all(&self) -> Vec<User> {
        self.db.users.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.db.users.read().await.len()
    }

    /// Insert a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is taken.
    pub async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.db.users.write().await;
        ensure_email_free(&users, &user.email, None)?;
        users.push(user.clone());
        Ok(user)
    }

    /// Replace a user's fields, keeping its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for unknown ids and
    /// `RepositoryError::Conflict` if the new email belongs to someone else.
    pub async fn update(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.db.users.write().await;
        let idx = users
            .iter()
            .position(|existing| existing.id == user.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {}", user.id)))?;
        ensure_email_free(&users, &user.email, Some(&user.id))?;

        let slot = users
            .get_mut(idx)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {}", user.id)))?;
        *slot = User {
            created_at: slot.created_at,
            ..user
        };
        Ok(slot.clone())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for unknown ids.
    pub async fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        let mut users = self.db.users.write().await;
        let before = users.len();
        users.retain(|user| &user.id != id);

        if users.len() == before {
            return Err(RepositoryError::NotFound(format!("user {id}")));
        }
        Ok(())
    }
}

fn ensure_email_free(
    users: &[User],
    email: &Email,
    except: Option<&UserId>,
) -> Result<(), RepositoryError> {
    let taken = users
        .iter()
        .any(|user| &user.email == email && Some(&user.id) != except);

    if taken {
        return Err(RepositoryError::Conflict(format!(
            "email {} is already registered",
            email.as_str()
        )));
    }
    Ok(())
}
