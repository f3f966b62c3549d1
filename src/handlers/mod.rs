//! HTTP handlers for the catalog, favorites and the route listing.

pub mod catalog;
pub mod favorite;
pub mod sitemap;
pub use catalog::*;
pub use favorite::*;
pub use sitemap::{openapi_json, sitemap};
