use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::dto::{GenreResponse, ListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Genres router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_genres))
}

/// `GET /genres`: Every genre, alphabetically.
async fn list_genres(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let genres = state.genres.list_genres().await?;

    Ok(Json(ListResponse::from(
        genres
            .into_iter()
            .map(GenreResponse::from)
            .collect::<Vec<_>>(),
    )))
}
