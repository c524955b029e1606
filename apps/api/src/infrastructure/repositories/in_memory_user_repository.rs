use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::UserRepository;
use crate::domain::user::{User, UserId};

/// In-memory implementation of UserRepository
///
/// State lives for the lifetime of the process only.
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Creates an empty repository whose first id is 1
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn next_id(&self) -> Result<UserId, String> {
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn save(&self, user: &User) -> Result<(), String> {
        self.users.write().await.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, String> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn exists(&self, id: UserId) -> Result<bool, String> {
        Ok(self.users.read().await.contains_key(&id))
    }

    async fn delete(&self, id: UserId) -> Result<bool, String> {
        Ok(self.users.write().await.remove(&id).is_some())
    }
}
