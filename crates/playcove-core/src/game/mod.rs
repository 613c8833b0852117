//! Game catalog domain: model, repository contract, and service.

pub mod model;
pub mod repository;
pub mod service;

pub use model::Game;
pub use repository::GameRepository;
pub use service::{GameService, GameUpsert};
