//! In-memory friendship store.
//!
//! Alongside the record map, the store keeps an index keyed by the canonical
//! unordered pair. Insertion checks that index under the write lock, so two
//! concurrent opposite-direction requests cannot both create a record.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use playcove_core::error::{CoveError, Result};
use playcove_core::friendship::{
    Friendship, FriendshipRepository, FriendshipStatus, GuardFn, MutateFn, pair_key,
};

#[derive(Default)]
struct Store {
    /// friendship id -> record
    records: HashMap<String, Friendship>,
    /// canonical (min, max) user pair -> friendship id
    pairs: HashMap<(String, String), String>,
}

/// `FriendshipRepository` with a canonical-pair uniqueness index.
#[derive(Default)]
pub struct InMemoryFriendshipRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryFriendshipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FriendshipRepository for InMemoryFriendshipRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Friendship>> {
        let store = self.store.read().await;
        Ok(store.records.get(id).cloned())
    }

    async fn find_by_pair(&self, user_a: &str, user_b: &str) -> Result<Option<Friendship>> {
        let store = self.store.read().await;
        let friendship = store
            .pairs
            .get(&pair_key(user_a, user_b))
            .and_then(|id| store.records.get(id))
            .cloned();
        Ok(friendship)
    }

    async fn list_involving(&self, user_id: &str) -> Result<Vec<Friendship>> {
        let store = self.store.read().await;
        let mut matching: Vec<Friendship> = store
            .records
            .values()
            .filter(|f| f.involves(user_id))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matching)
    }

    async fn list_by_requester(
        &self,
        user_id: &str,
        status: FriendshipStatus,
    ) -> Result<Vec<Friendship>> {
        let store = self.store.read().await;
        let mut matching: Vec<Friendship> = store
            .records
            .values()
            .filter(|f| f.requester_id == user_id && f.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matching)
    }

    async fn list_by_receiver(
        &self,
        user_id: &str,
        status: FriendshipStatus,
    ) -> Result<Vec<Friendship>> {
        let store = self.store.read().await;
        let mut matching: Vec<Friendship> = store
            .records
            .values()
            .filter(|f| f.receiver_id == user_id && f.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matching)
    }

    async fn insert(&self, friendship: &Friendship) -> Result<()> {
        let mut store = self.store.write().await;
        let key = friendship.canonical_pair();
        if store.pairs.contains_key(&key) {
            return Err(CoveError::conflict(
                "a friendship record already exists between these users",
            ));
        }
        store.pairs.insert(key, friendship.id.clone());
        store.records.insert(friendship.id.clone(), friendship.clone());
        Ok(())
    }

    async fn update(&self, id: &str, mutate: MutateFn) -> Result<Friendship> {
        let mut store = self.store.write().await;
        let friendship = store
            .records
            .get_mut(id)
            .ok_or_else(|| CoveError::not_found("friendship", id))?;
        mutate(friendship)?;
        Ok(friendship.clone())
    }

    async fn remove(&self, id: &str, guard: GuardFn) -> Result<()> {
        let mut store = self.store.write().await;
        let friendship = store
            .records
            .get(id)
            .ok_or_else(|| CoveError::not_found("friendship", id))?;
        guard(friendship)?;

        let key = friendship.canonical_pair();
        store.pairs.remove(&key);
        store.records.remove(id);
        Ok(())
    }
}
