use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::instrument;

use crate::error::{AppError, ErrorBody, ErrorsBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::hero_power::*;
use crate::serializer::{self, Rules};
use crate::state::AppState;
use crate::store::hero_power as store;

#[utoipa::path(
    get,
    path = "/hero_powers",
    tag = "Hero Powers",
    operation_id = "listHeroPowerLinks",
    summary = "List hero_powers",
    responses((status = 200, description = "List of hero_powers with their hero and power")),
)]
#[instrument(skip(state))]
pub async fn list_hero_powers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let rows = store::list_hero_powers(&state.db).await?;
    let body = serializer::serialize_many(&state.db, rows, &Rules::hero_power()).await?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/hero_powers",
    tag = "Hero Powers",
    operation_id = "createHeroPower",
    summary = "Give a hero a power",
    description = "Links an existing hero to an existing power. `strength` must be one of `Strong`, `Weak`, `Average`.",
    request_body = CreateHeroPowerRequest,
    responses(
        (status = 201, description = "hero_power created, with nested hero and power"),
        (status = 400, description = "Missing fields or invalid strength", body = ErrorsBody),
        (status = 404, description = "Hero or power not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_hero_power(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateHeroPowerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new = validate_create_hero_power(payload)?;
    let model = store::create_hero_power(&state.db, new).await?;
    let body = serializer::serialize_one(&state.db, model, &Rules::hero_power()).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/hero_powers/{id}",
    tag = "Hero Powers",
    operation_id = "getHeroPower",
    summary = "Get a hero_power by ID",
    params(("id" = i32, Path, description = "HeroPower ID")),
    responses(
        (status = 200, description = "hero_power with nested hero and power"),
        (status = 404, description = "HeroPower not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_hero_power(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Value>, AppError> {
    let model = store::get_hero_power(&state.db, id).await?;
    let body = serializer::serialize_one(&state.db, model, &Rules::hero_power()).await?;
    Ok(Json(body))
}

#[utoipa::path(
    patch,
    path = "/hero_powers/{id}",
    tag = "Hero Powers",
    operation_id = "updateHeroPower",
    summary = "Change a hero_power's strength",
    params(("id" = i32, Path, description = "HeroPower ID")),
    request_body = UpdateHeroPowerRequest,
    responses(
        (status = 200, description = "hero_power updated"),
        (status = 400, description = "Missing or invalid strength", body = ErrorsBody),
        (status = 404, description = "HeroPower not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_hero_power(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateHeroPowerRequest>,
) -> Result<Json<Value>, AppError> {
    store::get_hero_power(&state.db, id).await?;
    let changes = validate_update_hero_power(payload)?;
    let model = store::update_hero_power(&state.db, id, changes).await?;
    let body = serializer::serialize_one(&state.db, model, &Rules::hero_power()).await?;
    Ok(Json(body))
}

#[utoipa::path(
    delete,
    path = "/hero_powers/{id}",
    tag = "Hero Powers",
    operation_id = "deleteHeroPower",
    summary = "Remove a power from a hero",
    params(("id" = i32, Path, description = "HeroPower ID")),
    responses(
        (status = 204, description = "hero_power deleted"),
        (status = 404, description = "HeroPower not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_hero_power(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode, AppError> {
    store::delete_hero_power(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
