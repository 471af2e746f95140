use serde::Serialize;

use crate::entities::{artist, designer, game, genre, mechanic, publisher};
use crate::services::GameDetail;

// ============ Response DTOs ============

/// `{ "count": n, "results": [...] }` envelope used by the listing endpoints.
///
/// `count` is the number of items in this page, not the total number of matches.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub count: usize,
    pub results: Vec<T>,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

/// Game with its genres embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub year_published: Option<String>,
    pub bgg_rating: Option<f64>,
    pub difficulty_rating: Option<f64>,
    pub description: Option<String>,
    pub play_time: Option<i32>,
    pub available: Option<bool>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub genres: Vec<GenreResponse>,
}

/// `GET /games/{id}`: the listing shape plus the people, publishers and mechanics.
#[derive(Debug, Serialize)]
pub struct GameDetailResponse {
    #[serde(flatten)]
    pub game: GameResponse,
    pub designers: Vec<PersonResponse>,
    pub artists: Vec<PersonResponse>,
    pub publishers: Vec<NamedResponse>,
    pub mechanics: Vec<NamedResponse>,
}

/// Designer or artist. `dob` is an ISO 8601 date.
#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub dob: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NamedResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl From<(game::Model, Vec<genre::Model>)> for GameResponse {
    fn from((game, genres): (game::Model, Vec<genre::Model>)) -> Self {
        Self {
            id: game.id,
            name: game.name,
            slug: game.slug,
            year_published: game.year_published,
            bgg_rating: game.bgg_rating,
            difficulty_rating: game.difficulty_rating,
            description: game.description,
            play_time: game.play_time,
            available: game.available,
            min_players: game.min_players,
            max_players: game.max_players,
            image: game.image,
            thumbnail: game.thumbnail,
            genres: genres.into_iter().map(GenreResponse::from).collect(),
        }
    }
}

impl From<genre::Model> for GenreResponse {
    fn from(genre: genre::Model) -> Self {
        Self {
            id: genre.id,
            title: genre.title,
            description: genre.description,
        }
    }
}

impl From<GameDetail> for GameDetailResponse {
    fn from(detail: GameDetail) -> Self {
        Self {
            game: GameResponse::from((detail.game, detail.genres)),
            designers: detail.designers.into_iter().map(PersonResponse::from).collect(),
            artists: detail.artists.into_iter().map(PersonResponse::from).collect(),
            publishers: detail.publishers.into_iter().map(NamedResponse::from).collect(),
            mechanics: detail.mechanics.into_iter().map(NamedResponse::from).collect(),
        }
    }
}

impl From<designer::Model> for PersonResponse {
    fn from(designer: designer::Model) -> Self {
        Self {
            id: designer.id,
            name: designer.name,
            dob: designer.dob.map(|d| d.to_string()),
        }
    }
}

impl From<artist::Model> for PersonResponse {
    fn from(artist: artist::Model) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            dob: artist.dob.map(|d| d.to_string()),
        }
    }
}

impl From<publisher::Model> for NamedResponse {
    fn from(publisher: publisher::Model) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name,
        }
    }
}

impl From<mechanic::Model> for NamedResponse {
    fn from(mechanic: mechanic::Model) -> Self {
        Self {
            id: mechanic.id,
            name: mechanic.name,
        }
    }
}
