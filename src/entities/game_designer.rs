use sea_orm::entity::prelude::*;

/// Association row linking a game to a designer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_designers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub game_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub designer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::designer::Entity",
        from = "Column::DesignerId",
        to = "super::designer::Column::Id",
        on_delete = "Cascade"
    )]
    Designer,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::designer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
