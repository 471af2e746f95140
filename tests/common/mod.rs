#![allow(dead_code, clippy::expect_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};
use tower::ServiceExt;

use tabletop_api::config::{
    Config, DEFAULT_MAX_CONNECTIONS, DEFAULT_MIN_CONNECTIONS, DEFAULT_QUERY_TIMEOUT, Environment,
};
use tabletop_api::entities::{
    artist, designer, game, game_artist, game_designer, game_genre, game_mechanic, game_publisher,
    genre, mechanic, publisher,
};
use tabletop_api::state::AppState;

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();

    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

/// GET and parse the body as JSON.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        server_host: std::net::IpAddr::from([127, 0, 0, 1]),
        server_port: 0,
        environment: Environment::Development,
        log_level: "warn".to_string(),
        frontend_url: "http://localhost:5173".to_string(),
        query_timeout: DEFAULT_QUERY_TIMEOUT,
        db_max_connections: DEFAULT_MAX_CONNECTIONS,
        db_min_connections: DEFAULT_MIN_CONNECTIONS,
    }
}

/// In-memory `SQLite` database with migrations applied.
pub async fn test_db() -> DatabaseConnection {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();
    Migrator::up(&db, None).await.unwrap_or_default();
    db
}

/// Build the app router over `db`.
pub fn app_with(db: DatabaseConnection) -> Router {
    tabletop_api::routes::router().with_state(AppState::new(db, &test_config()))
}

/// Row description used to seed the `game` table.
#[derive(Debug, Clone, Default)]
pub struct GameSeed {
    pub id: i32,
    pub name: &'static str,
    pub year: Option<&'static str>,
    pub bgg_rating: Option<f64>,
    pub difficulty_rating: Option<f64>,
    pub play_time: Option<i32>,
    pub available: Option<bool>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
}

pub async fn insert_game(db: &DatabaseConnection, seed: GameSeed) {
    let slug = seed.name.to_lowercase().replace(' ', "-");
    game::ActiveModel {
        id: ActiveValue::Set(seed.id),
        name: ActiveValue::Set(seed.name.to_string()),
        image: ActiveValue::Set(Some(format!("https://img.tabletop.test/{slug}.jpg"))),
        thumbnail: ActiveValue::Set(Some(format!("https://img.tabletop.test/{slug}_t.jpg"))),
        slug: ActiveValue::Set(Some(slug)),
        year_published: ActiveValue::Set(seed.year.map(str::to_string)),
        bgg_rating: ActiveValue::Set(seed.bgg_rating),
        difficulty_rating: ActiveValue::Set(seed.difficulty_rating),
        description: ActiveValue::Set(None),
        play_time: ActiveValue::Set(seed.play_time),
        available: ActiveValue::Set(seed.available),
        min_players: ActiveValue::Set(seed.min_players),
        max_players: ActiveValue::Set(seed.max_players),
    }
    .insert(db)
    .await
    .expect("insert game");
}

pub async fn insert_genre(db: &DatabaseConnection, id: i32, title: &str) {
    genre::ActiveModel {
        id: ActiveValue::Set(id),
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(Some(format!("{title} games"))),
    }
    .insert(db)
    .await
    .expect("insert genre");
}

pub async fn tag(db: &DatabaseConnection, game_id: i32, genre_ids: &[i32]) {
    for &genre_id in genre_ids {
        game_genre::Entity::insert(game_genre::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            genre_id: ActiveValue::Set(genre_id),
        })
        .exec_without_returning(db)
        .await
        .expect("tag game");
    }
}

/// Designer, artist, publisher and mechanic rows, keyed by id.
#[derive(Debug, Clone, Copy)]
pub enum Credit {
    Designer(i32, &'static str),
    Artist(i32, &'static str),
    Publisher(i32, &'static str),
    Mechanic(i32, &'static str),
}

pub async fn insert_credit(db: &DatabaseConnection, credit: Credit) {
    let inserted = match credit {
        Credit::Designer(id, name) => designer::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
            dob: ActiveValue::Set(None),
        }
        .insert(db)
        .await
        .map(|_| ()),
        Credit::Artist(id, name) => artist::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
            dob: ActiveValue::Set(None),
        }
        .insert(db)
        .await
        .map(|_| ()),
        Credit::Publisher(id, name) => publisher::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
        }
        .insert(db)
        .await
        .map(|_| ()),
        Credit::Mechanic(id, name) => mechanic::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
        }
        .insert(db)
        .await
        .map(|_| ()),
    };
    inserted.expect("insert credit");
}

/// Link `game_id` to the credit's row.
pub async fn credit(db: &DatabaseConnection, game_id: i32, credit: Credit) {
    let linked = match credit {
        Credit::Designer(id, _) => game_designer::Entity::insert(game_designer::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            designer_id: ActiveValue::Set(id),
        })
        .exec_without_returning(db)
        .await,
        Credit::Artist(id, _) => game_artist::Entity::insert(game_artist::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            artist_id: ActiveValue::Set(id),
        })
        .exec_without_returning(db)
        .await,
        Credit::Publisher(id, _) => game_publisher::Entity::insert(game_publisher::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            publisher_id: ActiveValue::Set(id),
        })
        .exec_without_returning(db)
        .await,
        Credit::Mechanic(id, _) => game_mechanic::Entity::insert(game_mechanic::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            mechanic_id: ActiveValue::Set(id),
        })
        .exec_without_returning(db)
        .await,
    };
    linked.expect("link credit");
}

/// Genres: 1 Strategy, 2 Family, 3 Party.
///
/// | id | name       | year | bgg | difficulty | play | available | players | genres |
/// |----|------------|------|-----|------------|------|-----------|---------|--------|
/// | 1  | Catan      | 1995 | 7.1 | 2.3        | 90   | true      | 3-4     | 1, 2   |
/// | 2  | Wingspan   | 2019 | 8.0 | 2.4        | 70   | true      | 1-5     | 1, 2   |
/// | 3  | Codenames  | 2015 | 7.6 | 1.3        | 15   | false     | 2-8     | 3      |
/// | 4  | Gloomhaven | 2017 | 8.6 | 3.9        | 120  | true      | 1-4     | 1      |
/// | 5  | Hnefatafl  | 400  | 6.7 | 2.2        | 60   | false     | 2-2     | 1      |
/// | 6  | Dixit      | 2008 | 7.2 | 1.2        | 30   | true      | 3-6     | 2, 3   |
pub async fn seed_catalog(db: &DatabaseConnection) {
    insert_genre(db, 1, "Strategy").await;
    insert_genre(db, 2, "Family").await;
    insert_genre(db, 3, "Party").await;

    let rows = [
        (1, "Catan", "1995", 7.1, 2.3, 90, true, 3, 4, &[1, 2][..]),
        (2, "Wingspan", "2019", 8.0, 2.4, 70, true, 1, 5, &[1, 2][..]),
        (3, "Codenames", "2015", 7.6, 1.3, 15, false, 2, 8, &[3][..]),
        (4, "Gloomhaven", "2017", 8.6, 3.9, 120, true, 1, 4, &[1][..]),
        (5, "Hnefatafl", "400", 6.7, 2.2, 60, false, 2, 2, &[1][..]),
        (6, "Dixit", "2008", 7.2, 1.2, 30, true, 3, 6, &[2, 3][..]),
    ];

    for (id, name, year, bgg, difficulty, play, available, min, max, genres) in rows {
        insert_game(
            db,
            GameSeed {
                id,
                name,
                year: Some(year),
                bgg_rating: Some(bgg),
                difficulty_rating: Some(difficulty),
                play_time: Some(play),
                available: Some(available),
                min_players: Some(min),
                max_players: Some(max),
            },
        )
        .await;
        tag(db, id, genres).await;
    }
}

/// App over the standard six-game catalog.
pub async fn catalog_app() -> Router {
    let db = test_db().await;
    seed_catalog(&db).await;
    app_with(db)
}

/// Names of the games in a listing response, in order.
pub fn names(json: &serde_json::Value) -> Vec<String> {
    json["results"]
        .as_array()
        .map(|games| {
            games
                .iter()
                .map(|g| g["name"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Ids of the games in a listing response, in order.
pub fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["results"]
        .as_array()
        .map(|games| games.iter().filter_map(|g| g["id"].as_i64()).collect())
        .unwrap_or_default()
}
