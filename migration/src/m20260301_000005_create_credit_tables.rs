use sea_orm_migration::prelude::*;

/// Creates the `designer`, `artist`, `publisher` and `mechanic` lookup tables
/// shown on the game detail page.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                named_table(Designer::Table, Designer::Id, Designer::Name)
                    .col(ColumnDef::new(Designer::Dob).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                named_table(Artist::Table, Artist::Id, Artist::Name)
                    .col(ColumnDef::new(Artist::Dob).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(named_table(
                Publisher::Table,
                Publisher::Id,
                Publisher::Name,
            ))
            .await?;

        manager
            .create_table(named_table(Mechanic::Table, Mechanic::Id, Mechanic::Name))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mechanic::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Publisher::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Designer::Table).to_owned())
            .await
    }
}

/// `id` primary key plus a required `name`.
fn named_table<T, I, N>(table: T, id: I, name: N) -> TableCreateStatement
where
    T: IntoIden + 'static,
    I: IntoIden,
    N: IntoIden,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(name).string_len(255).not_null())
        .to_owned()
}

#[derive(DeriveIden)]
enum Designer {
    Table,
    Id,
    Name,
    Dob,
}

#[derive(DeriveIden)]
enum Artist {
    Table,
    Id,
    Name,
    Dob,
}

#[derive(DeriveIden)]
enum Publisher {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Mechanic {
    Table,
    Id,
    Name,
}
