use serde::Deserialize;

use super::is_blank;
use crate::error::AppError;
use crate::store::hero::{HeroChanges, NewHero};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateHeroRequest {
    #[schema(example = "Kamala Khan")]
    pub name: Option<String>,
    #[schema(example = "Ms. Marvel")]
    pub super_name: Option<String>,
}

#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateHeroRequest {
    pub name: Option<String>,
    pub super_name: Option<String>,
}

pub fn validate_create_hero(req: CreateHeroRequest) -> Result<NewHero, AppError> {
    let mut errors = Vec::new();
    if is_blank(req.name.as_deref()) {
        errors.push("Name is required.".to_string());
    }
    if is_blank(req.super_name.as_deref()) {
        errors.push("Super name is required.".to_string());
    }

    match (req.name, req.super_name) {
        (Some(name), Some(super_name)) if errors.is_empty() => Ok(NewHero { name, super_name }),
        _ => Err(AppError::Validation(errors)),
    }
}

pub fn validate_update_hero(req: UpdateHeroRequest) -> Result<HeroChanges, AppError> {
    let mut errors = Vec::new();
    if req.name.as_deref().is_some_and(|v| v.trim().is_empty()) {
        errors.push("Name must not be empty.".to_string());
    }
    if req.super_name.as_deref().is_some_and(|v| v.trim().is_empty()) {
        errors.push("Super name must not be empty.".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(HeroChanges {
        name: req.name,
        super_name: req.super_name,
    })
}
