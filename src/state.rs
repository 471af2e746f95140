use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::services::{GameQueryService, GenreService};

/// Shared application state available to all request handlers via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub games: GameQueryService,
    pub genres: GenreService,
}

impl AppState {
    /// Wire the read services onto one pooled connection, each bounded by the
    /// configured query timeout.
    #[must_use]
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        let games = GameQueryService::new(db.clone(), config.query_timeout);
        let genres = GenreService::new(db.clone(), config.query_timeout);
        Self { db, games, genres }
    }
}
