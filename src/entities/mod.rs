pub mod artist;
pub mod designer;
pub mod game;
pub mod game_artist;
pub mod game_designer;
pub mod game_genre;
pub mod game_mechanic;
pub mod game_publisher;
pub mod genre;
pub mod mechanic;
pub mod publisher;
