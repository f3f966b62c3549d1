//! OpenAPI document for every route the service registers. The sitemap is derived from it.

use crate::error::{ErrorBody, MessageBody};
use crate::handlers::sitemap::{RouteEntry, Sitemap};
use crate::model::{Character, Favorite, Planet, User};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "favorites-api",
        version = env!("CARGO_PKG_VERSION"),
        description = "Characters, planets, users and the current user's favorite planets"
    ),
    paths(
        crate::handlers::sitemap::sitemap,
        crate::handlers::sitemap::openapi_json,
        crate::handlers::catalog::list_people,
        crate::handlers::catalog::get_person,
        crate::handlers::catalog::list_planets,
        crate::handlers::catalog::get_planet,
        crate::handlers::catalog::list_users,
        crate::handlers::favorite::list_favorites,
        crate::handlers::favorite::add_favorite_planet,
        crate::routes::common::health,
        crate::routes::common::ready,
        crate::routes::common::version,
    ),
    components(schemas(
        Character,
        Planet,
        User,
        Favorite,
        ErrorBody,
        MessageBody,
        Sitemap,
        RouteEntry,
    )),
    tags(
        (name = crate::handlers::catalog::CATALOG_TAG, description = "Characters, planets and users"),
        (name = crate::handlers::favorite::FAVORITE_TAG, description = "Favorite planets of the current user"),
        (name = crate::handlers::sitemap::META_TAG, description = "Route listing, health and version"),
    ),
)]
pub struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
