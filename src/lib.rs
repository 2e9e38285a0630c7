pub mod config;
pub mod db;
pub mod error;

// Persistence boundary and search
pub mod search;
pub mod store;

// Recipe CRUD on top of the store
pub mod service;

// HTTP surface
pub mod api;

// Command-line client
pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use search::SearchCriteria;
pub use service::RecipeService;
pub use store::{InMemoryRecipeStore, RecipeStore, SqliteRecipeStore};
