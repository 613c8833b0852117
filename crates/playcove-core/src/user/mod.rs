//! User profile domain: model, repository contract, and service.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{GamertagVisibility, User};
pub use repository::UserRepository;
pub use service::{NewUser, ProfileUpdate, UserService};
