use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    /// Textual in storage; listing filters and ordering cast it to an integer.
    pub year_published: Option<String>,
    pub bgg_rating: Option<f64>,
    pub difficulty_rating: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Minutes.
    pub play_time: Option<i32>,
    pub available: Option<bool>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_genre::Entity")]
    GameGenres,
    #[sea_orm(has_many = "super::game_designer::Entity")]
    GameDesigners,
    #[sea_orm(has_many = "super::game_artist::Entity")]
    GameArtists,
    #[sea_orm(has_many = "super::game_publisher::Entity")]
    GamePublishers,
    #[sea_orm(has_many = "super::game_mechanic::Entity")]
    GameMechanics,
}

impl Related<super::game_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameGenres.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_genre::Relation::Game.def().rev())
    }
}

impl Related<super::designer::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_designer::Relation::Designer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_designer::Relation::Game.def().rev())
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_artist::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_artist::Relation::Game.def().rev())
    }
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_publisher::Relation::Publisher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_publisher::Relation::Game.def().rev())
    }
}

impl Related<super::mechanic::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_mechanic::Relation::Mechanic.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_mechanic::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
