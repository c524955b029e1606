use async_trait::async_trait;

use crate::domain::user::{User, UserId};

/// Repository trait for users
///
/// Defines the contract for storing and retrieving users.
/// Implementations must never hand out the same id twice.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Reserve the next user id
    async fn next_id(&self) -> Result<UserId, String>;

    /// Save a user (insert or replace)
    async fn save(&self, user: &User) -> Result<(), String>;

    /// Find a user by ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, String>;

    /// Check whether a user exists
    async fn exists(&self, id: UserId) -> Result<bool, String>;

    /// Delete a user by ID, returning false if there was none
    async fn delete(&self, id: UserId) -> Result<bool, String>;
}
