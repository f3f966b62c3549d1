//! `GET /` route listing and the raw OpenAPI document.

use crate::openapi::openapi;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

pub const META_TAG: &str = "meta";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Sitemap {
    pub routes: Vec<RouteEntry>,
}

/// Flatten an OpenAPI document into (method, path) pairs, sorted by path then method.
pub fn routes_of(doc: &utoipa::openapi::OpenApi) -> Vec<RouteEntry> {
    let mut routes = Vec::new();
    for (path, item) in &doc.paths.paths {
        let operations = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];
        for (method, present) in operations {
            if present {
                routes.push(RouteEntry {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }
    routes.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));
    routes
}

/// List every registered route
#[utoipa::path(
    get,
    path = "/",
    tag = META_TAG,
    responses((status = 200, description = "All routes", body = Sitemap)),
)]
pub async fn sitemap() -> Json<Sitemap> {
    Json(Sitemap {
        routes: routes_of(&openapi()),
    })
}

/// OpenAPI 3 document
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = META_TAG,
    responses((status = 200, description = "OpenAPI document")),
)]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi())
}
