use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    #[sea_orm(column_name = "image_link")]
    pub image_link: Option<String>,
    #[sea_orm(column_name = "facebook_link")]
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    /// JSON array of genre names
    #[sea_orm(column_type = "Text")]
    pub genres: String,
    #[sea_orm(column_name = "seeking_talent")]
    pub seeking_talent: bool,
    #[sea_orm(column_name = "seeking_description", column_type = "Text", nullable)]
    pub seeking_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shows::Entity")]
    Shows,
}

impl Related<super::shows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
