//! Catalog and favorite routes.

use crate::handlers::{
    add_favorite_planet, get_person, get_planet, list_favorites, list_people, list_planets, list_users,
    openapi_json, sitemap,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/openapi.json", get(openapi_json))
        .route("/people", get(list_people))
        .route("/people/:id", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planets/:id", get(get_planet))
        .route("/users", get(list_users))
        .route("/users/favorites", get(list_favorites))
        .route("/favorite/planet/:planet_id", post(add_favorite_planet))
        .with_state(state)
}
