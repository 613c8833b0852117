//! Friendship repository trait.
//!
//! State transitions race when two actors touch the same record (an accept
//! and a remove arriving together), so the contract pushes each transition
//! into the store as an atomic read-modify-write: `update` and `remove` take
//! a closure that runs under the store's write scope for that record.

use super::model::{Friendship, FriendshipStatus};
use crate::error::Result;

/// Mutation applied to a friendship inside the store's transaction scope.
/// Returning an error aborts the transition and leaves the record untouched.
pub type MutateFn = Box<dyn FnOnce(&mut Friendship) -> Result<()> + Send>;

/// Precondition checked against a friendship before it is deleted.
pub type GuardFn = Box<dyn FnOnce(&Friendship) -> Result<()> + Send>;

/// An abstract repository for friendship records.
///
/// Implementations must enforce at most one record per unordered user pair,
/// keyed on [`super::model::pair_key`].
#[async_trait::async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Finds a friendship by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Friendship>>;

    /// Finds the record between two users, in either direction.
    async fn find_by_pair(&self, user_a: &str, user_b: &str) -> Result<Option<Friendship>>;

    /// Lists every record involving the user, regardless of role or status.
    async fn list_involving(&self, user_id: &str) -> Result<Vec<Friendship>>;

    /// Lists records where the user is the requester, filtered by status.
    async fn list_by_requester(
        &self,
        user_id: &str,
        status: FriendshipStatus,
    ) -> Result<Vec<Friendship>>;

    /// Lists records where the user is the receiver, filtered by status.
    async fn list_by_receiver(
        &self,
        user_id: &str,
        status: FriendshipStatus,
    ) -> Result<Vec<Friendship>>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// `Conflict` if a record already exists for the unordered pair.
    async fn insert(&self, friendship: &Friendship) -> Result<()>;

    /// Applies a state transition atomically and returns the updated record.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id does not resolve; whatever `mutate` returns
    /// otherwise.
    async fn update(&self, id: &str, mutate: MutateFn) -> Result<Friendship>;

    /// Deletes the record after `guard` passes, atomically.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id does not resolve; whatever `guard` returns
    /// otherwise.
    async fn remove(&self, id: &str, guard: GuardFn) -> Result<()>;
}
