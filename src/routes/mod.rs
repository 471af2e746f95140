mod games;
mod genres;
mod health;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health`: liveness plus a database ping
/// - `GET /api/v1/health`: detailed health check with database latency
/// - `GET /api/v1/games`: filtered, sorted, paginated game listing
/// - `GET /api/v1/games/{id}`: one game with its genres
/// - `GET /api/v1/genres`: every genre
pub fn router() -> Router<AppState> {
    let api_v1 = Router::new()
        .merge(health::api_router())
        .nest("/games", games::router())
        .nest("/genres", genres::router());

    Router::new()
        .merge(health::root_router())
        .nest("/api/v1", api_v1)
}
