//! Bootstrap DDL for the catalog tables. Idempotent; run once at startup.

use super::postgres::{FAVORITE_PLANET_FK, FAVORITE_UNIQUE_CONSTRAINT, FAVORITE_USER_FK};
use crate::error::AppError;
use sqlx::PgPool;

const CATALOG_TABLES: &[(&str, &str)] = &[
    (
        "characters",
        r#"
        CREATE TABLE IF NOT EXISTS characters (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            gender TEXT,
            birth_year TEXT,
            height INTEGER,
            eye_color TEXT,
            hair_color TEXT
        )
        "#,
    ),
    (
        "planets",
        r#"
        CREATE TABLE IF NOT EXISTS planets (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            climate TEXT,
            terrain TEXT,
            population BIGINT,
            diameter INTEGER
        )
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            username TEXT,
            is_active BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    ),
];

const FAVORITE_CONSTRAINT_EXISTS: &str =
    "SELECT EXISTS(SELECT 1 FROM pg_constraint WHERE conname = $1 AND conrelid = 'favorites'::regclass)";

/// Create characters, planets, users and favorites if missing.
/// Favorites get named foreign keys and the (user_id, planet_id) unique constraint.
/// Fails when an existing favorites table cannot take that constraint.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for (name, ddl) in CATALOG_TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }

    let favorites_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL,
            planet_id INTEGER NOT NULL,
            CONSTRAINT {user_fk} FOREIGN KEY (user_id) REFERENCES users (id),
            CONSTRAINT {planet_fk} FOREIGN KEY (planet_id) REFERENCES planets (id),
            CONSTRAINT {unique} UNIQUE (user_id, planet_id)
        )
        "#,
        user_fk = FAVORITE_USER_FK,
        planet_fk = FAVORITE_PLANET_FK,
        unique = FAVORITE_UNIQUE_CONSTRAINT,
    );
    sqlx::query(&favorites_ddl).execute(pool).await?;

    // Tables created before the constraint existed still need it.
    let has_unique: (bool,) = sqlx::query_as(FAVORITE_CONSTRAINT_EXISTS)
        .bind(FAVORITE_UNIQUE_CONSTRAINT)
        .fetch_one(pool)
        .await?;
    if !has_unique.0 {
        let alter = format!(
            "ALTER TABLE favorites ADD CONSTRAINT {} UNIQUE (user_id, planet_id)",
            FAVORITE_UNIQUE_CONSTRAINT
        );
        if let Err(e) = sqlx::query(&alter).execute(pool).await {
            tracing::error!(error = %e, "cannot add favorites unique constraint; remove duplicate favorites first");
            return Err(e.into());
        }
        tracing::info!(constraint = FAVORITE_UNIQUE_CONSTRAINT, "added favorites unique constraint");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_lookup_is_scoped_to_favorites() {
        assert!(FAVORITE_CONSTRAINT_EXISTS.contains("conname = $1"));
        assert!(FAVORITE_CONSTRAINT_EXISTS.contains("conrelid = 'favorites'::regclass"));
    }

    /// Needs a scratch database: `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn duplicate_favorites_block_startup() {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL");
        let pool = PgPool::connect(&url).await.unwrap();
        sqlx::query("DROP TABLE IF EXISTS favorites").execute(&pool).await.unwrap();
        sqlx::query("CREATE TABLE favorites (id SERIAL PRIMARY KEY, user_id INTEGER NOT NULL, planet_id INTEGER NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO favorites (user_id, planet_id) VALUES (1, 1), (1, 1)")
            .execute(&pool)
            .await
            .unwrap();

        let result = ensure_tables(&pool).await;
        sqlx::query("DROP TABLE favorites").execute(&pool).await.unwrap();
        assert!(matches!(result, Err(AppError::Db(_))));
    }
}
