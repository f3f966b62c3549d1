//! In-memory store for tests and `STORE=memory` demo runs.

use super::Store;
use crate::error::{AppError, Resource};
use crate::model::{Character, Favorite, NewFavorite, Planet, Record, User};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    characters: Vec<Character>,
    planets: Vec<Planet>,
    users: Vec<User>,
    favorites: Vec<Favorite>,
    next_favorite_id: i32,
}

/// Rows are kept sorted by id. One write guard spans the duplicate check and the insert.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

fn sorted<R: Record>(mut rows: Vec<R>) -> Vec<R> {
    rows.sort_by_key(|r| r.id());
    rows
}

fn by_id<R: Record>(rows: &[R], id: i32) -> Option<R> {
    rows.binary_search_by_key(&id, |r| r.id())
        .ok()
        .map(|i| rows[i].clone())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_characters(mut self, rows: Vec<Character>) -> Self {
        self.tables.get_mut().characters = sorted(rows);
        self
    }

    pub fn with_planets(mut self, rows: Vec<Planet>) -> Self {
        self.tables.get_mut().planets = sorted(rows);
        self
    }

    pub fn with_users(mut self, rows: Vec<User>) -> Self {
        self.tables.get_mut().users = sorted(rows);
        self
    }

    pub fn with_favorites(mut self, rows: Vec<Favorite>) -> Self {
        let tables = self.tables.get_mut();
        tables.favorites = sorted(rows);
        tables.next_favorite_id = tables.favorites.last().map(|f| f.id).unwrap_or(0);
        self
    }

    /// A small catalog with user 1 for local runs without a database.
    pub fn seeded() -> Self {
        Self::new()
            .with_characters(vec![
                Character {
                    id: 1,
                    name: "Luke Skywalker".into(),
                    gender: Some("male".into()),
                    birth_year: Some("19BBY".into()),
                    height: Some(172),
                    eye_color: Some("blue".into()),
                    hair_color: Some("blond".into()),
                },
                Character {
                    id: 2,
                    name: "Leia Organa".into(),
                    gender: Some("female".into()),
                    birth_year: Some("19BBY".into()),
                    height: Some(150),
                    eye_color: Some("brown".into()),
                    hair_color: Some("brown".into()),
                },
                Character {
                    id: 3,
                    name: "R2-D2".into(),
                    gender: None,
                    birth_year: Some("33BBY".into()),
                    height: Some(96),
                    eye_color: Some("red".into()),
                    hair_color: None,
                },
            ])
            .with_planets(vec![
                Planet {
                    id: 1,
                    name: "Tatooine".into(),
                    climate: Some("arid".into()),
                    terrain: Some("desert".into()),
                    population: Some(200_000),
                    diameter: Some(10_465),
                },
                Planet {
                    id: 2,
                    name: "Alderaan".into(),
                    climate: Some("temperate".into()),
                    terrain: Some("grasslands, mountains".into()),
                    population: Some(2_000_000_000),
                    diameter: Some(12_500),
                },
                Planet {
                    id: 3,
                    name: "Hoth".into(),
                    climate: Some("frozen".into()),
                    terrain: Some("tundra, ice caves".into()),
                    population: None,
                    diameter: Some(7_200),
                },
            ])
            .with_users(vec![User {
                id: 1,
                email: "demo@example.com".into(),
                username: Some("demo".into()),
                is_active: true,
            }])
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_character(&self, id: i32) -> Result<Option<Character>, AppError> {
        Ok(by_id(&self.tables.read().await.characters, id))
    }

    async fn list_characters(&self) -> Result<Vec<Character>, AppError> {
        Ok(self.tables.read().await.characters.clone())
    }

    async fn find_planet(&self, id: i32) -> Result<Option<Planet>, AppError> {
        Ok(by_id(&self.tables.read().await.planets, id))
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, AppError> {
        Ok(self.tables.read().await.planets.clone())
    }

    async fn find_user(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(by_id(&self.tables.read().await.users, id))
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn favorites_for_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_favorite(&self, new: NewFavorite) -> Result<Favorite, AppError> {
        let mut tables = self.tables.write().await;
        if by_id(&tables.users, new.user_id).is_none() {
            return Err(AppError::NotFound(Resource::User));
        }
        if by_id(&tables.planets, new.planet_id).is_none() {
            return Err(AppError::NotFound(Resource::Planet));
        }
        if tables
            .favorites
            .iter()
            .any(|f| f.user_id == new.user_id && f.planet_id == new.planet_id)
        {
            return Err(AppError::FavoriteExists);
        }
        tables.next_favorite_id += 1;
        let favorite = Favorite {
            id: tables.next_favorite_id,
            user_id: new.user_id,
            planet_id: new.planet_id,
        };
        tables.favorites.push(favorite.clone());
        Ok(favorite)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(id: i32, name: &str) -> Planet {
        Planet {
            id,
            name: name.into(),
            climate: None,
            terrain: None,
            population: None,
            diameter: None,
        }
    }

    #[tokio::test]
    async fn lists_are_sorted_by_id() {
        let store = MemoryStore::new().with_planets(vec![planet(9, "Dagobah"), planet(2, "Alderaan")]);
        let ids: Vec<i32> = store.list_planets().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 9]);
        assert_eq!(store.find_planet(9).await.unwrap().map(|p| p.name), Some("Dagobah".into()));
        assert!(store.find_planet(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_assigns_ids_after_existing_rows() {
        let store = MemoryStore::seeded().with_favorites(vec![Favorite {
            id: 4,
            user_id: 1,
            planet_id: 1,
        }]);
        let fav = store
            .insert_favorite(NewFavorite {
                user_id: 1,
                planet_id: 2,
            })
            .await
            .unwrap();
        assert_eq!(fav.id, 5);
    }

    #[tokio::test]
    async fn insert_rejects_duplicates_and_dangling_references() {
        let store = MemoryStore::seeded();
        let new = NewFavorite {
            user_id: 1,
            planet_id: 3,
        };
        store.insert_favorite(new).await.unwrap();
        assert!(matches!(store.insert_favorite(new).await, Err(AppError::FavoriteExists)));
        assert!(matches!(
            store
                .insert_favorite(NewFavorite {
                    user_id: 1,
                    planet_id: 99
                })
                .await,
            Err(AppError::NotFound(Resource::Planet))
        ));
        assert!(matches!(
            store
                .insert_favorite(NewFavorite {
                    user_id: 42,
                    planet_id: 3
                })
                .await,
            Err(AppError::NotFound(Resource::User))
        ));
        assert_eq!(store.favorites_for_user(1).await.unwrap().len(), 1);
    }
}
