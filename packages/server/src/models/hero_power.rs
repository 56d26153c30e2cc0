use common::Strength;
use serde::Deserialize;

use super::is_blank;
use crate::error::AppError;
use crate::store::hero_power::{HeroPowerChanges, NewHeroPower};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateHeroPowerRequest {
    #[schema(example = 1)]
    pub hero_id: Option<i32>,
    #[schema(example = 2)]
    pub power_id: Option<i32>,
    #[schema(example = "Average")]
    pub strength: Option<String>,
}

#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateHeroPowerRequest {
    #[schema(example = "Strong")]
    pub strength: Option<String>,
}

fn strength_error() -> AppError {
    AppError::validation(format!(
        "Strength must be one of {}.",
        Strength::allowed()
    ))
}

/// Presence first (ids of 0 count as absent), then the allowed strength set.
/// Whether the hero and power exist is checked by the store, inside the write.
pub fn validate_create_hero_power(req: CreateHeroPowerRequest) -> Result<NewHeroPower, AppError> {
    let (Some(hero_id), Some(power_id), Some(strength)) = (
        req.hero_id.filter(|&id| id != 0),
        req.power_id.filter(|&id| id != 0),
        req.strength.filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::validation("Missing required fields"));
    };

    if strength.parse::<Strength>().is_err() {
        return Err(strength_error());
    }

    Ok(NewHeroPower {
        hero_id,
        power_id,
        strength,
    })
}

pub fn validate_update_hero_power(
    req: UpdateHeroPowerRequest,
) -> Result<HeroPowerChanges, AppError> {
    if is_blank(req.strength.as_deref()) {
        return Err(AppError::validation("Missing required fields"));
    }
    if req
        .strength
        .as_deref()
        .is_some_and(|s| s.parse::<Strength>().is_err())
    {
        return Err(strength_error());
    }

    Ok(HeroPowerChanges {
        strength: req.strength,
    })
}
