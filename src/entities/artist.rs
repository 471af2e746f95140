use sea_orm::entity::prelude::*;

/// Person credited with a game's artwork.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Date of birth.
    pub dob: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_artist::Entity")]
    GameArtists,
}

impl Related<super::game_artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameArtists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
