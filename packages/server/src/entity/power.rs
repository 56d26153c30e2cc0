use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "powers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    /// At least 10 characters; see `validation::validate_description`.
    pub description: String,

    #[sea_orm(has_many)]
    pub hero_powers: HasMany<super::hero_power::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
