//! Persistence store seam. Handlers only see `dyn Store`; PostgreSQL and in-memory backends implement it.

mod memory;
mod postgres;
mod schema;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use schema::ensure_tables;

use crate::error::AppError;
use crate::model::{Character, Favorite, NewFavorite, Planet, User};
use async_trait::async_trait;

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_character(&self, id: i32) -> Result<Option<Character>, AppError>;

    /// All characters, ordered by id.
    async fn list_characters(&self) -> Result<Vec<Character>, AppError>;

    async fn find_planet(&self, id: i32) -> Result<Option<Planet>, AppError>;

    async fn list_planets(&self) -> Result<Vec<Planet>, AppError>;

    async fn find_user(&self, id: i32) -> Result<Option<User>, AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    async fn favorites_for_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError>;

    /// Insert and commit one favorite. The (user, planet) pair is unique: a duplicate fails with
    /// `AppError::FavoriteExists` no matter how many callers race. A dangling user or planet
    /// reference fails with `AppError::NotFound`.
    async fn insert_favorite(&self, new: NewFavorite) -> Result<Favorite, AppError>;

    /// Cheap liveness check behind `GET /ready`.
    async fn ping(&self) -> Result<(), AppError>;
}
