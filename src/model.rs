//! Persisted entities. Field order is the JSON field order.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row type backed by one table. Columns are listed in select order; `id` is the primary key.
pub trait Record: for<'r> FromRow<'r, PgRow> + Serialize + Clone + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i32;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<i32>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

impl Record for Character {
    const TABLE: &'static str = "characters";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "gender",
        "birth_year",
        "height",
        "eye_color",
        "hair_color",
    ];

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i32>,
}

impl Record for Planet {
    const TABLE: &'static str = "planets";
    const COLUMNS: &'static [&'static str] = &["id", "name", "climate", "terrain", "population", "diameter"];

    fn id(&self) -> i32 {
        self.id
    }
}

/// Users never carry credentials; there is no column for them to leak from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: Option<String>,
    pub is_active: bool,
}

impl Record for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["id", "email", "username", "is_active"];

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl Record for Favorite {
    const TABLE: &'static str = "favorites";
    const COLUMNS: &'static [&'static str] = &["id", "user_id", "planet_id"];

    fn id(&self) -> i32 {
        self.id
    }
}

/// Insert payload for a favorite; the store assigns the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: i32,
    pub planet_id: i32,
}
