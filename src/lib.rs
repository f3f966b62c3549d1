//! favorites-api: REST API over a characters/planets catalog and the current user's favorite planets.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreKind};
pub use error::{AppError, ConfigError, Resource};
pub use model::{Character, Favorite, NewFavorite, Planet, User};
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_tables, MemoryStore, PgStore, Store};
