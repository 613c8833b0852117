//! In-memory user store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use playcove_core::error::Result;
use playcove_core::user::{User, UserRepository};

/// `UserRepository` backed by a `RwLock`-guarded map keyed by user id.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_subject(&self, subject_id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.subject_id == subject_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn save(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }
}
