//! Request-level rules on top of the store: not-found mapping and favorite creation order.

mod catalog;
mod favorite;
pub use catalog::CatalogService;
pub use favorite::FavoriteService;
