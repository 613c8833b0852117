//! User repository trait.
//!
//! Defines the interface for user persistence operations.

use super::model::User;
use crate::error::Result;

/// An abstract repository for managing user persistence.
///
/// This trait defines the contract for persisting and retrieving users,
/// decoupling the application's core logic from the specific storage
/// mechanism (in-memory store, relational database, remote API).
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by their id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Finds a user by their identity-provider subject id.
    async fn find_by_subject(&self, subject_id: &str) -> Result<Option<User>>;

    /// Finds a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Saves a user, inserting or replacing by id.
    async fn save(&self, user: &User) -> Result<()>;

    /// Lists all stored users.
    async fn list_all(&self) -> Result<Vec<User>>;
}
