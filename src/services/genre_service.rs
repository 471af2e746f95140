use std::collections::HashMap;
use std::time::Duration;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use super::bounded;
use crate::entities::{game_genre, genre};
use crate::error::AppError;

/// Read-only access to genres.
#[derive(Debug, Clone)]
pub struct GenreService {
    db: DatabaseConnection,
    timeout: Duration,
}

impl GenreService {
    #[must_use]
    pub const fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Every genre, ordered by title then id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the database fails.
    pub async fn list_genres(&self) -> Result<Vec<genre::Model>, AppError> {
        bounded(
            self.timeout,
            genre::Entity::find()
                .order_by_asc(genre::Column::Title)
                .order_by_asc(genre::Column::Id)
                .all(&self.db),
        )
        .await
    }
}

/// Genres of each listed game, keyed by game id, each list ordered by genre id.
///
/// Games without genres are absent from the map.
pub(crate) async fn genres_by_game(
    db: &DatabaseConnection,
    game_ids: &[i32],
) -> Result<HashMap<i32, Vec<genre::Model>>, DbErr> {
    if game_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let links = game_genre::Entity::find()
        .filter(game_genre::Column::GameId.is_in(game_ids.iter().copied()))
        .all(db)
        .await?;

    if links.is_empty() {
        return Ok(HashMap::new());
    }

    let mut genre_ids: Vec<i32> = links.iter().map(|link| link.genre_id).collect();
    genre_ids.sort_unstable();
    genre_ids.dedup();

    let genres: HashMap<i32, genre::Model> = genre::Entity::find()
        .filter(genre::Column::Id.is_in(genre_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|g| (g.id, g))
        .collect();

    let mut by_game: HashMap<i32, Vec<genre::Model>> = HashMap::new();
    for link in links {
        if let Some(g) = genres.get(&link.genre_id) {
            by_game.entry(link.game_id).or_default().push(g.clone());
        }
    }
    for tags in by_game.values_mut() {
        tags.sort_by_key(|g| g.id);
    }

    Ok(by_game)
}
