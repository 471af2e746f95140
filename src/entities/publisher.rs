use sea_orm::entity::prelude::*;

/// Company publishing a game.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "publisher")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_publisher::Entity")]
    GamePublishers,
}

impl Related<super::game_publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePublishers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
