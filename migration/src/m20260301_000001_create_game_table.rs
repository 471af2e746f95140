use sea_orm_migration::prelude::*;

/// Creates the `game` table holding catalog entries.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[allow(clippy::enum_variant_names)]
#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
    Name,
    Slug,
    YearPublished,
    BggRating,
    DifficultyRating,
    Description,
    PlayTime,
    Available,
    MinPlayers,
    MaxPlayers,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Game::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Game::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Game::Slug).string_len(255).null())
                    // Stored as text, compared numerically by the listing query.
                    .col(ColumnDef::new(Game::YearPublished).string_len(5).null())
                    .col(ColumnDef::new(Game::BggRating).double().null())
                    .col(ColumnDef::new(Game::DifficultyRating).double().null())
                    .col(ColumnDef::new(Game::Description).text().null())
                    .col(ColumnDef::new(Game::PlayTime).integer().null())
                    .col(ColumnDef::new(Game::Available).boolean().null())
                    .col(ColumnDef::new(Game::MinPlayers).integer().null())
                    .col(ColumnDef::new(Game::MaxPlayers).integer().null())
                    .to_owned(),
            )
            .await?;

        // Default listing order
        manager
            .create_index(
                Index::create()
                    .name("idx_game_bgg_rating")
                    .table(Game::Table)
                    .col(Game::BggRating)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_name")
                    .table(Game::Table)
                    .col(Game::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}
