use std::time::Duration;

use sea_orm::sea_query::{Alias, Expr, Func, Order, Query, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use super::game_query::{Bounds, Direction, GameQuery, GenreFilter, SortKey};
use super::{bounded, genre_service};
use crate::entities::{artist, designer, game, game_genre, genre, mechanic, publisher};
use crate::error::AppError;

/// A game together with every genre it is tagged with, ordered by genre id.
pub type GameWithGenres = (game::Model, Vec<genre::Model>);

/// Everything shown on a game's detail page. Each list is ordered by id.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub game: game::Model,
    pub genres: Vec<genre::Model>,
    pub designers: Vec<designer::Model>,
    pub artists: Vec<artist::Model>,
    pub publishers: Vec<publisher::Model>,
    pub mechanics: Vec<mechanic::Model>,
}

/// Read-only access to the game catalog.
///
/// Holds a clone of the pooled connection handed in at startup; nothing else is
/// shared between calls.
#[derive(Debug, Clone)]
pub struct GameQueryService {
    db: DatabaseConnection,
    timeout: Duration,
}

impl GameQueryService {
    #[must_use]
    pub const fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Fetch one page of games matching every filter in `query`, with their genres.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the database fails or the query
    /// exceeds the configured timeout.
    pub async fn list_games(&self, query: &GameQuery) -> Result<Vec<GameWithGenres>, AppError> {
        let select = build_select(query);
        let db = &self.db;

        bounded(self.timeout, async move {
            let games = select.all(db).await?;
            attach_genres(db, games).await
        })
        .await
    }

    /// Fetch a single game with its genres, designers, artists, publishers and mechanics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id, or
    /// [`AppError::ServiceUnavailable`] if the database fails.
    pub async fn get_game(&self, id: i32) -> Result<GameDetail, AppError> {
        bounded(self.timeout, load_detail(&self.db, id))
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }
}

async fn load_detail(db: &DatabaseConnection, id: i32) -> Result<Option<GameDetail>, DbErr> {
    let Some(game) = game::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let genres = genre_service::genres_by_game(db, &[game.id])
        .await?
        .remove(&game.id)
        .unwrap_or_default();
    let designers = game
        .find_related(designer::Entity)
        .order_by_asc(designer::Column::Id)
        .all(db)
        .await?;
    let artists = game
        .find_related(artist::Entity)
        .order_by_asc(artist::Column::Id)
        .all(db)
        .await?;
    let publishers = game
        .find_related(publisher::Entity)
        .order_by_asc(publisher::Column::Id)
        .all(db)
        .await?;
    let mechanics = game
        .find_related(mechanic::Entity)
        .order_by_asc(mechanic::Column::Id)
        .all(db)
        .await?;

    Ok(Some(GameDetail {
        game,
        genres,
        designers,
        artists,
        publishers,
        mechanics,
    }))
}

async fn attach_genres(
    db: &DatabaseConnection,
    games: Vec<game::Model>,
) -> Result<Vec<GameWithGenres>, DbErr> {
    let ids: Vec<i32> = games.iter().map(|g| g.id).collect();
    let mut genres = genre_service::genres_by_game(db, &ids).await?;

    Ok(games
        .into_iter()
        .map(|g| {
            let tags = genres.remove(&g.id).unwrap_or_default();
            (g, tags)
        })
        .collect())
}

/// Compose the listing statement: filters ANDed in a fixed order, one ordering
/// clause plus an id tie-break, then offset/limit.
pub(crate) fn build_select(query: &GameQuery) -> Select<game::Entity> {
    let mut select = game::Entity::find();

    match query.genre {
        Some(GenreFilter::Id(genre_id)) => select = select.filter(has_genre(genre_id)),
        Some(GenreFilter::Unmatchable(_)) => select = select.filter(Expr::val(1).eq(0)),
        None => {}
    }

    if let Some(available) = query.available {
        select = select.filter(game::Column::Available.eq(available));
    }

    if let Some(min) = query.players.min {
        select = select.filter(game::Column::MinPlayers.gte(min));
    }
    if let Some(max) = query.players.max {
        select = select.filter(game::Column::MaxPlayers.lte(max));
    }

    select = filter_range(select, column(game::Column::PlayTime), query.play_time);
    select = filter_range(select, year_as_integer(), query.year);

    if let Some(search) = &query.search {
        select = select.filter(name_contains(search));
    }

    let order = match query.ordering.direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    };

    select
        .order_by(sort_expr(query.ordering.key), order)
        .order_by_asc(game::Column::Id)
        .offset(query.offset())
        .limit(query.page_size)
}

/// `EXISTS (SELECT 1 FROM game_genres WHERE game_id = game.id AND genre_id = ?)`
fn has_genre(genre_id: i32) -> SimpleExpr {
    Expr::exists(
        Query::select()
            .expr(Expr::val(1))
            .from(game_genre::Entity)
            .and_where(
                Expr::col((game_genre::Entity, game_genre::Column::GameId))
                    .equals((game::Entity, game::Column::Id)),
            )
            .and_where(Expr::col((game_genre::Entity, game_genre::Column::GenreId)).eq(genre_id))
            .to_owned(),
    )
}

fn filter_range(
    mut select: Select<game::Entity>,
    expr: SimpleExpr,
    bounds: Bounds,
) -> Select<game::Entity> {
    if let Some(min) = bounds.min {
        select = select.filter(Expr::expr(expr.clone()).gte(min));
    }
    if let Some(max) = bounds.max {
        select = select.filter(Expr::expr(expr).lte(max));
    }
    select
}

fn column(col: game::Column) -> SimpleExpr {
    Expr::col((game::Entity, col)).into()
}

fn year_as_integer() -> SimpleExpr {
    Func::cast_as(
        Expr::col((game::Entity, game::Column::YearPublished)),
        Alias::new("INTEGER"),
    )
    .into()
}

fn sort_expr(key: SortKey) -> SimpleExpr {
    match key {
        SortKey::Name => column(game::Column::Name),
        SortKey::BggRating => column(game::Column::BggRating),
        SortKey::DifficultyRating => column(game::Column::DifficultyRating),
        SortKey::PlayTime => column(game::Column::PlayTime),
        SortKey::Year => year_as_integer(),
    }
}

/// `LOWER(game.name) LIKE LOWER('%text%') ESCAPE '!'`, with both sides folded by
/// the backend's `LOWER`.
fn name_contains(text: &str) -> SimpleExpr {
    Expr::cust_with_exprs(
        format!("LOWER($1) LIKE LOWER($2) ESCAPE '{LIKE_ESCAPE}'"),
        [
            SimpleExpr::from(Expr::col((game::Entity, game::Column::Name))),
            SimpleExpr::from(Expr::val(format!("%{}%", escape_like(text)))),
        ],
    )
}

const LIKE_ESCAPE: char = '!';

/// Search text is matched literally, so LIKE metacharacters are escaped.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
