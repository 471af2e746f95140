pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_game_table;
mod m20260301_000002_create_genre_table;
mod m20260301_000003_create_game_genres_table;
mod m20260301_000004_add_game_images;
mod m20260301_000005_create_credit_tables;
mod m20260301_000006_create_credit_link_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_game_table::Migration),
            Box::new(m20260301_000002_create_genre_table::Migration),
            Box::new(m20260301_000003_create_game_genres_table::Migration),
            Box::new(m20260301_000004_add_game_images::Migration),
            Box::new(m20260301_000005_create_credit_tables::Migration),
            Box::new(m20260301_000006_create_credit_link_tables::Migration),
        ]
    }
}
