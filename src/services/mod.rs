pub mod game_query;
pub mod game_service;
pub mod genre_service;

use std::future::Future;
use std::time::Duration;

use sea_orm::DbErr;

use crate::error::AppError;

pub use game_query::{GameListParams, GameQuery, GenreFilter};
pub use game_service::{GameDetail, GameQueryService, GameWithGenres};
pub use genre_service::GenreService;

const UNAVAILABLE: &str = "The game catalog is temporarily unavailable";

/// Run a storage future under `timeout`, mapping failures to [`AppError::ServiceUnavailable`].
///
/// Dropping the returned future (for example when the client disconnects) drops the
/// in-flight query with it.
pub(crate) async fn bounded<T, F>(timeout: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            tracing::error!(error = %err, "catalog query failed");
            Err(AppError::ServiceUnavailable(UNAVAILABLE.to_string()))
        }
        Err(_) => {
            tracing::error!(
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                "catalog query timed out"
            );
            Err(AppError::ServiceUnavailable(UNAVAILABLE.to_string()))
        }
    }
}
