pub mod catalog;
pub mod identity;
pub mod memory;
pub mod seed;

pub use crate::identity::{HttpIdentityVerifier, StaticIdentityVerifier};
pub use crate::memory::{
    InMemoryFriendshipRepository, InMemoryGameRepository, InMemoryReviewRepository,
    InMemoryUserRepository,
};
