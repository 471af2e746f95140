pub mod game;

pub use game::{
    GameDetailResponse, GameResponse, GenreResponse, ListResponse, NamedResponse, PersonResponse,
};
