use common::Strength;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Association between a hero and a power, carrying how strong the hero is at it.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hero_powers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub strength: Strength,

    pub hero_id: i32,
    #[sea_orm(belongs_to, from = "hero_id", to = "id", on_delete = "Cascade")]
    pub hero: HasOne<super::hero::Entity>,

    pub power_id: i32,
    #[sea_orm(belongs_to, from = "power_id", to = "id", on_delete = "Cascade")]
    pub power: HasOne<super::power::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
