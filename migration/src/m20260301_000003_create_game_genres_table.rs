use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameGenres::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameGenres::GameId).integer().not_null())
                    .col(ColumnDef::new(GameGenres::GenreId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(GameGenres::GameId)
                            .col(GameGenres::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_genres_game_id")
                            .from(GameGenres::Table, GameGenres::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_genres_genre_id")
                            .from(GameGenres::Table, GameGenres::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the EXISTS lookup of the genre filter
        manager
            .create_index(
                Index::create()
                    .name("idx_game_genres_genre_id")
                    .table(GameGenres::Table)
                    .col(GameGenres::GenreId)
                    .col(GameGenres::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameGenres::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GameGenres {
    Table,
    GameId,
    GenreId,
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
}
