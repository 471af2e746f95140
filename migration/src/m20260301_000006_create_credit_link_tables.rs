use sea_orm_migration::prelude::*;

/// Creates the join tables between `game` and each detail lookup table.
#[derive(DeriveMigrationName)]
pub struct Migration;

/// `(join table, lookup table, lookup key column)`
const LINKS: [(&str, &str, &str); 4] = [
    ("game_designers", "designer", "designer_id"),
    ("game_artists", "artist", "artist_id"),
    ("game_publishers", "publisher", "publisher_id"),
    ("game_mechanics", "mechanic", "mechanic_id"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (link, target, key) in LINKS {
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(link))
                        .if_not_exists()
                        .col(ColumnDef::new(Alias::new("game_id")).integer().not_null())
                        .col(ColumnDef::new(Alias::new(key)).integer().not_null())
                        .primary_key(
                            Index::create()
                                .col(Alias::new("game_id"))
                                .col(Alias::new(key)),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{link}_game_id"))
                                .from(Alias::new(link), Alias::new("game_id"))
                                .to(Game::Table, Game::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{link}_{key}"))
                                .from(Alias::new(link), Alias::new(key))
                                .to(Alias::new(target), Alias::new("id"))
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (link, _, _) in LINKS.iter().rev() {
            manager
                .drop_table(Table::drop().table(Alias::new(*link)).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
}
