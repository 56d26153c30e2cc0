use sea_orm::*;
use tracing::info;

use crate::entity::hero;
use crate::error::AppError;
use crate::graph;
use crate::validation::validate_non_empty;

#[derive(Debug, Clone)]
pub struct NewHero {
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroChanges {
    pub name: Option<String>,
    pub super_name: Option<String>,
}

pub async fn find_hero<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<hero::Model>, DbErr> {
    hero::Entity::find_by_id(id).one(db).await
}

pub async fn get_hero<C: ConnectionTrait>(db: &C, id: i32) -> Result<hero::Model, AppError> {
    find_hero(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hero not found".into()))
}

pub async fn list_heroes<C: ConnectionTrait>(db: &C) -> Result<Vec<hero::Model>, DbErr> {
    hero::Entity::find()
        .order_by_asc(hero::Column::Id)
        .all(db)
        .await
}

pub async fn create_hero(db: &DatabaseConnection, new: NewHero) -> Result<hero::Model, AppError> {
    validate_non_empty("name", &new.name)?;
    validate_non_empty("super_name", &new.super_name)?;

    let txn = db.begin().await?;
    let model = hero::ActiveModel {
        name: Set(new.name),
        super_name: Set(new.super_name),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(hero_id = model.id, "Hero created");
    Ok(model)
}

pub async fn update_hero(
    db: &DatabaseConnection,
    id: i32,
    changes: HeroChanges,
) -> Result<hero::Model, AppError> {
    let txn = db.begin().await?;
    let existing = get_hero(&txn, id).await?;

    if changes == HeroChanges::default() {
        return Ok(existing);
    }

    let mut active: hero::ActiveModel = existing.into();
    if let Some(name) = changes.name {
        validate_non_empty("name", &name)?;
        active.name = Set(name);
    }
    if let Some(super_name) = changes.super_name {
        validate_non_empty("super_name", &super_name)?;
        active.super_name = Set(super_name);
    }

    let model = active.update(&txn).await?;
    txn.commit().await?;

    info!(hero_id = id, "Hero updated");
    Ok(model)
}

/// Delete a hero together with every hero_power row that references it.
pub async fn delete_hero(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let txn = db.begin().await?;
    let _hero = get_hero(&txn, id).await?;

    let detached = graph::detach_hero(&txn, id).await?;
    hero::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    info!(hero_id = id, hero_powers_removed = detached, "Hero deleted");
    Ok(())
}
