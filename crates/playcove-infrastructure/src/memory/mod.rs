//! In-memory repository implementations.
//!
//! These back the repository traits with `RwLock`-guarded maps. Each store
//! owns its own lock; a write guard spans every read-modify-write, which is
//! what gives friendship transitions their single-record transaction scope.

pub mod friendships;
pub mod games;
pub mod reviews;
pub mod users;

pub use friendships::InMemoryFriendshipRepository;
pub use games::InMemoryGameRepository;
pub use reviews::InMemoryReviewRepository;
pub use users::InMemoryUserRepository;
