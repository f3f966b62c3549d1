use super::CatalogService;
use crate::error::AppError;
use crate::model::{Favorite, NewFavorite};
use crate::store::Store;

pub struct FavoriteService;

impl FavoriteService {
    /// Favorites of `user_id`; 404 when the user does not exist.
    pub async fn list_for_user(store: &dyn Store, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let user = CatalogService::user(store, user_id).await?;
        store.favorites_for_user(user.id).await
    }

    /// Checks run user, then planet, then uniqueness. The uniqueness check is the store's
    /// atomic insert, so concurrent duplicates get `FavoriteExists` rather than a second row.
    pub async fn add_planet(store: &dyn Store, user_id: i32, planet_id: u64) -> Result<Favorite, AppError> {
        let user = CatalogService::user(store, user_id).await?;
        let planet = CatalogService::planet(store, planet_id).await?;
        let favorite = store
            .insert_favorite(NewFavorite {
                user_id: user.id,
                planet_id: planet.id,
            })
            .await?;
        tracing::info!(favorite_id = favorite.id, user_id, planet_id, "favorite planet added");
        Ok(favorite)
    }
}
