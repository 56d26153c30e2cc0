use sea_orm::*;
use tracing::info;

use crate::entity::hero;
use crate::error::AppError;
use crate::store::hero::{NewHero, create_hero};
use crate::store::hero_power::{NewHeroPower, create_hero_power};
use crate::store::power::{NewPower, create_power};

/// Demo heroes as `(name, super_name)`.
const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
];

/// Demo powers as `(name, description)`.
const POWERS: &[(&str, &str)] = &[
    (
        "super strength",
        "gives the wielder super-human strengths",
    ),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    (
        "elasticity",
        "can stretch the human body to extreme lengths",
    ),
];

/// Links as `(hero index, power index, strength)` into the tables above.
const LINKS: &[(usize, usize, &str)] = &[
    (0, 3, "Strong"),
    (1, 0, "Average"),
    (2, 2, "Strong"),
    (3, 1, "Weak"),
    (4, 2, "Average"),
    (5, 0, "Strong"),
    (5, 1, "Strong"),
];

/// Insert the demo roster through the entity store, so every field guard
/// applies. Does nothing if any hero already exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), AppError> {
    if hero::Entity::find().one(db).await?.is_some() {
        info!("Heroes already present, skipping seed");
        return Ok(());
    }

    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for &(name, super_name) in HEROES {
        let model = create_hero(
            db,
            NewHero {
                name: name.to_string(),
                super_name: super_name.to_string(),
            },
        )
        .await?;
        hero_ids.push(model.id);
    }

    let mut power_ids = Vec::with_capacity(POWERS.len());
    for &(name, description) in POWERS {
        let model = create_power(
            db,
            NewPower {
                name: name.to_string(),
                description: description.to_string(),
            },
        )
        .await?;
        power_ids.push(model.id);
    }

    for &(hero_idx, power_idx, strength) in LINKS {
        create_hero_power(
            db,
            NewHeroPower {
                hero_id: hero_ids[hero_idx],
                power_id: power_ids[power_idx],
                strength: strength.to_string(),
            },
        )
        .await?;
    }

    info!(
        heroes = hero_ids.len(),
        powers = power_ids.len(),
        hero_powers = LINKS.len(),
        "Seeded demo data"
    );
    Ok(())
}
