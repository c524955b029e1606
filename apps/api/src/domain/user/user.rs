use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};

/// Identifier of a user, assigned sequentially from 1
pub type UserId = i64;

/// User entity
///
/// Holds the password only as a hash. Nothing outside the repository
/// layer and the password check should read it.
///
/// # Example
/// ```
/// use playlist_api::domain::user::{User, UserUpdate};
///
/// let mut user = User::new(1, "alice".into(), "alice@example.com".into(), "hash".into());
/// assert!(user.updated_at().is_none());
///
/// user.apply_update(UserUpdate {
///     email: Some("new@example.com".into()),
///     ..Default::default()
/// }).expect("non-empty update");
///
/// assert_eq!(user.email(), "new@example.com");
/// assert!(user.updated_at().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Partial change set for a user
///
/// `Some` overwrites the stored value (an empty string included),
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl UserUpdate {
    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password_hash.is_none()
    }
}

impl User {
    /// Creates a new user stamped with the current time
    pub fn new(id: UserId, username: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overlays the set fields of `update` and stamps `updated_at`
    ///
    /// # Returns
    /// * `Err(DomainError::EmptyUpdate)` - If no field is set; the user is left untouched
    pub fn apply_update(&mut self, update: UserUpdate) -> DomainResult<()> {
        if update.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }

        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password_hash) = update.password_hash {
            self.password_hash = password_hash;
        }
        self.updated_at = Some(Utc::now());

        Ok(())
    }

    // ===== Getters =====

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    #[allow(dead_code)]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the time of the last update, if the user was ever updated
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
