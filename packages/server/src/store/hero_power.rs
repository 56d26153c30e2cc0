use sea_orm::*;
use tracing::{info, warn};

use crate::entity::{hero, hero_power, power};
use crate::error::AppError;
use crate::validation::validate_strength;

#[derive(Debug, Clone)]
pub struct NewHeroPower {
    pub hero_id: i32,
    pub power_id: i32,
    /// Raw value; parsed by the entity-level strength guard.
    pub strength: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroPowerChanges {
    pub strength: Option<String>,
}

pub async fn find_hero_power<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<hero_power::Model>, DbErr> {
    hero_power::Entity::find_by_id(id).one(db).await
}

pub async fn get_hero_power<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<hero_power::Model, AppError> {
    find_hero_power(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("HeroPower not found".into()))
}

pub async fn list_hero_powers<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<hero_power::Model>, DbErr> {
    hero_power::Entity::find()
        .order_by_asc(hero_power::Column::Id)
        .all(db)
        .await
}

/// Link an existing hero to an existing power.
///
/// Both ends are looked up inside the write transaction, so a missing hero or
/// power is reported as `AppError::Integrity` rather than surfacing as a
/// foreign key failure from the database.
pub async fn create_hero_power(
    db: &DatabaseConnection,
    new: NewHeroPower,
) -> Result<hero_power::Model, AppError> {
    let strength = validate_strength(&new.strength)?;

    let txn = db.begin().await?;
    ensure_linked_rows_exist(&txn, new.hero_id, new.power_id).await?;

    let model = hero_power::ActiveModel {
        hero_id: Set(new.hero_id),
        power_id: Set(new.power_id),
        strength: Set(strength),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(
        hero_power_id = model.id,
        hero_id = model.hero_id,
        power_id = model.power_id,
        strength = %model.strength,
        "HeroPower created"
    );
    Ok(model)
}

pub async fn update_hero_power(
    db: &DatabaseConnection,
    id: i32,
    changes: HeroPowerChanges,
) -> Result<hero_power::Model, AppError> {
    let txn = db.begin().await?;
    let existing = get_hero_power(&txn, id).await?;

    let Some(raw) = changes.strength else {
        return Ok(existing);
    };
    let strength = validate_strength(&raw)?;

    let mut active: hero_power::ActiveModel = existing.into();
    active.strength = Set(strength);
    let model = active.update(&txn).await?;
    txn.commit().await?;

    info!(hero_power_id = id, strength = %model.strength, "HeroPower updated");
    Ok(model)
}

pub async fn delete_hero_power(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let txn = db.begin().await?;
    let _hero_power = get_hero_power(&txn, id).await?;
    hero_power::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    info!(hero_power_id = id, "HeroPower deleted");
    Ok(())
}

async fn ensure_linked_rows_exist<C: ConnectionTrait>(
    db: &C,
    hero_id: i32,
    power_id: i32,
) -> Result<(), AppError> {
    let hero = hero::Entity::find_by_id(hero_id).one(db).await?;
    let power = power::Entity::find_by_id(power_id).one(db).await?;

    if hero.is_none() || power.is_none() {
        warn!(hero_id, power_id, "Rejected HeroPower with dangling reference");
        return Err(AppError::Integrity("Hero or Power not found".into()));
    }
    Ok(())
}
