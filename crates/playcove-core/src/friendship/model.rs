//! Friendship domain model.
//!
//! A friendship is a directed request record between two users. The stored
//! pair is ordered (requester, receiver), but the uniqueness invariant is
//! per *unordered* pair: at most one record may exist between two users,
//! regardless of who asked first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Lifecycle state of a friendship record.
///
/// `Pending` may move to `Accepted` or `Declined`; the only exit from a
/// terminal state is deletion of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Declined,
}

/// A friendship record between two users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friendship {
    /// Unique friendship identifier (UUID format)
    pub id: String,
    /// The user who sent the request
    pub requester_id: String,
    /// The user the request was sent to
    pub receiver_id: String,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    /// Creates a new pending request.
    pub fn new_request(requester_id: impl Into<String>, receiver_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            requester_id: requester_id.into(),
            receiver_id: receiver_id.into(),
            status: FriendshipStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Whether the given user is the requester or the receiver.
    pub fn involves(&self, user_id: &str) -> bool {
        self.requester_id == user_id || self.receiver_id == user_id
    }

    /// The counterpart of the given user in this record, if they are part
    /// of it.
    pub fn other_user(&self, user_id: &str) -> Option<&str> {
        if self.requester_id == user_id {
            Some(&self.receiver_id)
        } else if self.receiver_id == user_id {
            Some(&self.requester_id)
        } else {
            None
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == FriendshipStatus::Accepted
    }

    /// Canonical key for this record's unordered pair.
    pub fn canonical_pair(&self) -> (String, String) {
        pair_key(&self.requester_id, &self.receiver_id)
    }
}

/// Canonical ordering for an unordered user pair.
///
/// Stores enforce the one-record-per-pair invariant on this key, so two
/// concurrent opposite-direction requests cannot both land.
pub fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
