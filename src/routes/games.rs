use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::dto::{GameDetailResponse, GameResponse, ListResponse};
use crate::error::AppError;
use crate::services::{GameListParams, GameQuery};
use crate::state::AppState;

/// Game catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_games))
        .route("/{id}", get(get_game))
}

/// `GET /games`: One page of games matching the query string filters.
///
/// Pairs are taken raw so that no parameter value can reject the request.
async fn list_games(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let params: GameListParams = pairs.into_iter().collect();
    let query = GameQuery::from_params(&params);
    tracing::debug!(?query, "listing games");

    let games = state.games.list_games(&query).await?;

    Ok(Json(ListResponse::from(
        games
            .into_iter()
            .map(GameResponse::from)
            .collect::<Vec<_>>(),
    )))
}

/// `GET /games/:id`: A single game with its genres, designers, artists, publishers and mechanics.
async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = state.games.get_game(id).await?;
    Ok(Json(GameDetailResponse::from(game)))
}
