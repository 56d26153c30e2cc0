use serde::Deserialize;

use super::is_blank;
use crate::error::AppError;
use crate::store::power::{NewPower, PowerChanges};

/// Minimum description length accepted when a client updates a power.
/// Deliberately stricter than the entity-level minimum.
pub const MIN_UPDATE_DESCRIPTION_LEN: usize = 20;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreatePowerRequest {
    #[schema(example = "flight")]
    pub name: Option<String>,
    #[schema(example = "gives the wielder the ability to fly through the skies at supersonic speed")]
    pub description: Option<String>,
}

#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdatePowerRequest {
    pub name: Option<String>,
    #[schema(example = "gives the wielder the ability to fly through the skies at supersonic speed")]
    pub description: Option<String>,
}

pub fn validate_create_power(req: CreatePowerRequest) -> Result<NewPower, AppError> {
    let mut errors = Vec::new();
    if is_blank(req.name.as_deref()) {
        errors.push("Name is required.".to_string());
    }
    if req.description.is_none() {
        errors.push("Description field is required.".to_string());
    }

    match (req.name, req.description) {
        (Some(name), Some(description)) if errors.is_empty() => Ok(NewPower { name, description }),
        _ => Err(AppError::Validation(errors)),
    }
}

pub fn validate_update_power(req: UpdatePowerRequest) -> Result<PowerChanges, AppError> {
    let Some(description) = req.description.filter(|d| !d.is_empty()) else {
        return Err(AppError::validation("Description field is required."));
    };

    let mut errors = Vec::new();
    if description.chars().count() < MIN_UPDATE_DESCRIPTION_LEN {
        errors.push("Description must be at least 20 characters long.".to_string());
    }
    if req.name.as_deref().is_some_and(|v| v.trim().is_empty()) {
        errors.push("Name must not be empty.".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(PowerChanges {
        name: req.name,
        description: Some(description),
    })
}
