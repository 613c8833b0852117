//! Review domain: model, repository contract, and service.

pub mod model;
pub mod repository;
pub mod service;

pub use model::Review;
pub use repository::ReviewRepository;
pub use service::{NewReview, ReviewService, ReviewUpdate};
