use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::instrument;

use crate::error::{AppError, ErrorBody, ErrorsBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::graph;
use crate::models::hero::*;
use crate::serializer::{self, Rules};
use crate::state::AppState;
use crate::store::hero as store;

#[utoipa::path(
    get,
    path = "/heroes",
    tag = "Heroes",
    operation_id = "listHeroes",
    summary = "List heroes",
    description = "Returns every hero with `id`, `name` and `super_name`. `hero_powers` is never included in listings.",
    responses(
        (status = 200, description = "List of heroes"),
    ),
)]
#[instrument(skip(state))]
pub async fn list_heroes(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let heroes = store::list_heroes(&state.db).await?;
    let body = serializer::serialize_many(&state.db, heroes, &Rules::hero_list()).await?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/heroes",
    tag = "Heroes",
    operation_id = "createHero",
    summary = "Create a hero",
    request_body = CreateHeroRequest,
    responses(
        (status = 201, description = "Hero created"),
        (status = 400, description = "Missing or blank fields", body = ErrorsBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_hero(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateHeroRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new = validate_create_hero(payload)?;
    let model = store::create_hero(&state.db, new).await?;
    let body = serializer::serialize_one(&state.db, model, &Rules::hero_detail()).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/heroes/{id}",
    tag = "Heroes",
    operation_id = "getHero",
    summary = "Get a hero by ID",
    description = "Returns the hero with its `hero_powers`. Each entry carries its nested `power` but not a reference back to the hero.",
    params(("id" = i32, Path, description = "Hero ID")),
    responses(
        (status = 200, description = "Hero details"),
        (status = 404, description = "Hero not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_hero(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Value>, AppError> {
    let model = store::get_hero(&state.db, id).await?;
    let body = serializer::serialize_one(&state.db, model, &Rules::hero_detail()).await?;
    Ok(Json(body))
}

#[utoipa::path(
    patch,
    path = "/heroes/{id}",
    tag = "Heroes",
    operation_id = "updateHero",
    summary = "Update a hero",
    description = "Partially updates a hero. An empty payload returns the hero unchanged.",
    params(("id" = i32, Path, description = "Hero ID")),
    request_body = UpdateHeroRequest,
    responses(
        (status = 200, description = "Hero updated"),
        (status = 400, description = "Blank fields", body = ErrorsBody),
        (status = 404, description = "Hero not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_hero(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateHeroRequest>,
) -> Result<Json<Value>, AppError> {
    // An unknown id is reported before anything about the body.
    store::get_hero(&state.db, id).await?;
    let changes = validate_update_hero(payload)?;
    let model = store::update_hero(&state.db, id, changes).await?;
    let body = serializer::serialize_one(&state.db, model, &Rules::hero_detail()).await?;
    Ok(Json(body))
}

#[utoipa::path(
    delete,
    path = "/heroes/{id}",
    tag = "Heroes",
    operation_id = "deleteHero",
    summary = "Delete a hero",
    description = "Deletes the hero and, in the same transaction, every hero_power that references it.",
    params(("id" = i32, Path, description = "Hero ID")),
    responses(
        (status = 204, description = "Hero deleted"),
        (status = 404, description = "Hero not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_hero(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode, AppError> {
    store::delete_hero(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/heroes/{id}/powers",
    tag = "Heroes",
    operation_id = "listHeroPowers",
    summary = "List the powers a hero has",
    description = "Projects the hero's hero_powers onto their powers, in the same order.",
    params(("id" = i32, Path, description = "Hero ID")),
    responses(
        (status = 200, description = "Powers of the hero"),
        (status = 404, description = "Hero not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn list_hero_powers(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Value>, AppError> {
    let hero = store::get_hero(&state.db, id).await?;
    let powers = graph::powers_of(&state.db, hero.id).await?;
    let body = serializer::serialize_many(&state.db, powers, &Rules::power()).await?;
    Ok(Json(body))
}
