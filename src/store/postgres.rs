//! PostgreSQL store over a shared `PgPool`.

use super::Store;
use crate::error::{AppError, Resource};
use crate::model::{Character, Favorite, NewFavorite, Planet, Record, User};
use crate::sql::{insert, select_all, select_by_id, select_where, QueryBuf};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Named in the bootstrap DDL so violations can be told apart.
pub(super) const FAVORITE_UNIQUE_CONSTRAINT: &str = "favorites_user_planet_key";
pub(super) const FAVORITE_USER_FK: &str = "favorites_user_id_fkey";
pub(super) const FAVORITE_PLANET_FK: &str = "favorites_planet_id_fkey";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(PgStore { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_optional<R: Record>(&self, q: QueryBuf) -> Result<Option<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in &q.params {
            query = query.bind(*p);
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }

    async fn fetch_all<R: Record>(&self, q: QueryBuf) -> Result<Vec<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in &q.params {
            query = query.bind(*p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}

/// Translate constraint violations on `favorites` into domain errors; anything else stays a database error.
fn map_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() && db.constraint() == Some(FAVORITE_UNIQUE_CONSTRAINT) {
            return AppError::FavoriteExists;
        }
        if db.is_foreign_key_violation() {
            match db.constraint() {
                Some(FAVORITE_USER_FK) => return AppError::NotFound(Resource::User),
                Some(FAVORITE_PLANET_FK) => return AppError::NotFound(Resource::Planet),
                _ => {}
            }
        }
    }
    AppError::Db(e)
}

#[async_trait]
impl Store for PgStore {
    async fn find_character(&self, id: i32) -> Result<Option<Character>, AppError> {
        self.fetch_optional(select_by_id::<Character>(id)).await
    }

    async fn list_characters(&self) -> Result<Vec<Character>, AppError> {
        self.fetch_all(select_all::<Character>()).await
    }

    async fn find_planet(&self, id: i32) -> Result<Option<Planet>, AppError> {
        self.fetch_optional(select_by_id::<Planet>(id)).await
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, AppError> {
        self.fetch_all(select_all::<Planet>()).await
    }

    async fn find_user(&self, id: i32) -> Result<Option<User>, AppError> {
        self.fetch_optional(select_by_id::<User>(id)).await
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.fetch_all(select_all::<User>()).await
    }

    async fn favorites_for_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        self.fetch_all(select_where::<Favorite>(&[("user_id", user_id)]))
            .await
    }

    async fn insert_favorite(&self, new: NewFavorite) -> Result<Favorite, AppError> {
        let q = insert::<Favorite>(&[("user_id", new.user_id), ("planet_id", new.planet_id)]);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Favorite>(&q.sql);
        for p in &q.params {
            query = query.bind(*p);
        }
        // Single statement, so it commits on its own; the unique constraint makes it atomic.
        query
            .fetch_one(&self.pool)
            .await
            .map_err(map_insert_error)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
