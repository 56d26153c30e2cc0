//! Navigation across hero <-> hero_power <-> power.
//!
//! Only foreign keys are stored; every view here is computed on demand from
//! the `hero_powers` rows, so nothing can go stale after a write.

use sea_orm::*;

use crate::entity::{hero_power, power};

/// The hero's join rows, in insertion (id) order.
pub async fn hero_powers_of_hero<C: ConnectionTrait>(
    db: &C,
    hero_id: i32,
) -> Result<Vec<hero_power::Model>, DbErr> {
    hero_power::Entity::find()
        .filter(hero_power::Column::HeroId.eq(hero_id))
        .order_by_asc(hero_power::Column::Id)
        .all(db)
        .await
}

/// The power's join rows, in insertion (id) order.
pub async fn hero_powers_of_power<C: ConnectionTrait>(
    db: &C,
    power_id: i32,
) -> Result<Vec<hero_power::Model>, DbErr> {
    hero_power::Entity::find()
        .filter(hero_power::Column::PowerId.eq(power_id))
        .order_by_asc(hero_power::Column::Id)
        .all(db)
        .await
}

/// `Hero.powers`: the powers reachable through the hero's join rows, in the
/// same order as those rows.
pub async fn powers_of<C: ConnectionTrait>(
    db: &C,
    hero_id: i32,
) -> Result<Vec<power::Model>, DbErr> {
    let rows = hero_power::Entity::find()
        .filter(hero_power::Column::HeroId.eq(hero_id))
        .find_also_related(power::Entity)
        .order_by_asc(hero_power::Column::Id)
        .all(db)
        .await?;

    Ok(project_powers(rows))
}

/// Project each join row onto its power, keeping the row order.
///
/// A row whose power did not load is skipped; with the foreign key in place
/// that only happens if the power was deleted between the two reads.
pub fn project_powers(rows: Vec<(hero_power::Model, Option<power::Model>)>) -> Vec<power::Model> {
    rows.into_iter().filter_map(|(_, power)| power).collect()
}

/// Remove every join row referencing the hero. Must run in the same
/// transaction that deletes the hero itself.
pub async fn detach_hero<C: ConnectionTrait>(db: &C, hero_id: i32) -> Result<u64, DbErr> {
    let res = hero_power::Entity::delete_many()
        .filter(hero_power::Column::HeroId.eq(hero_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Remove every join row referencing the power. Must run in the same
/// transaction that deletes the power itself.
pub async fn detach_power<C: ConnectionTrait>(db: &C, power_id: i32) -> Result<u64, DbErr> {
    let res = hero_power::Entity::delete_many()
        .filter(hero_power::Column::PowerId.eq(power_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
