use sea_orm::entity::prelude::*;

/// Gameplay mechanic such as worker placement or deck building.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mechanic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_mechanic::Entity")]
    GameMechanics,
}

impl Related<super::game_mechanic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMechanics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
