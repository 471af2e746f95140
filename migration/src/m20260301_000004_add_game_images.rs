use sea_orm_migration::prelude::*;

/// Adds `image` and `thumbnail` URLs to `game`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite takes one column per ALTER TABLE
        manager
            .alter_table(
                Table::alter()
                    .table(Game::Table)
                    .add_column(ColumnDef::new(Game::Image).string_len(1024).null())
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Game::Table)
                    .add_column(ColumnDef::new(Game::Thumbnail).string_len(1024).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Game::Table)
                    .drop_column(Game::Thumbnail)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Game::Table)
                    .drop_column(Game::Image)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Image,
    Thumbnail,
}
