use sea_orm::*;
use tracing::info;

use crate::entity::power;
use crate::error::AppError;
use crate::graph;
use crate::validation::{validate_description, validate_non_empty};

#[derive(Debug, Clone)]
pub struct NewPower {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn find_power<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<power::Model>, DbErr> {
    power::Entity::find_by_id(id).one(db).await
}

pub async fn get_power<C: ConnectionTrait>(db: &C, id: i32) -> Result<power::Model, AppError> {
    find_power(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Power not found".into()))
}

pub async fn list_powers<C: ConnectionTrait>(db: &C) -> Result<Vec<power::Model>, DbErr> {
    power::Entity::find()
        .order_by_asc(power::Column::Id)
        .all(db)
        .await
}

pub async fn create_power(
    db: &DatabaseConnection,
    new: NewPower,
) -> Result<power::Model, AppError> {
    validate_non_empty("name", &new.name)?;
    validate_description(&new.description)?;

    let txn = db.begin().await?;
    let model = power::ActiveModel {
        name: Set(new.name),
        description: Set(new.description),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(power_id = model.id, "Power created");
    Ok(model)
}

pub async fn update_power(
    db: &DatabaseConnection,
    id: i32,
    changes: PowerChanges,
) -> Result<power::Model, AppError> {
    let txn = db.begin().await?;
    let existing = get_power(&txn, id).await?;

    if changes == PowerChanges::default() {
        return Ok(existing);
    }

    let mut active: power::ActiveModel = existing.into();
    if let Some(name) = changes.name {
        validate_non_empty("name", &name)?;
        active.name = Set(name);
    }
    if let Some(description) = changes.description {
        validate_description(&description)?;
        active.description = Set(description);
    }

    let model = active.update(&txn).await?;
    txn.commit().await?;

    info!(power_id = id, "Power updated");
    Ok(model)
}

/// Delete a power together with every hero_power row that references it.
pub async fn delete_power(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let txn = db.begin().await?;
    let _power = get_power(&txn, id).await?;

    let detached = graph::detach_power(&txn, id).await?;
    power::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    info!(power_id = id, hero_powers_removed = detached, "Power deleted");
    Ok(())
}
