use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::instrument;

use crate::error::{AppError, ErrorBody, ErrorsBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::power::*;
use crate::serializer::{self, Rules};
use crate::state::AppState;
use crate::store::power as store;

#[utoipa::path(
    get,
    path = "/powers",
    tag = "Powers",
    operation_id = "listPowers",
    summary = "List powers",
    responses((status = 200, description = "List of powers")),
)]
#[instrument(skip(state))]
pub async fn list_powers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let powers = store::list_powers(&state.db).await?;
    let body = serializer::serialize_many(&state.db, powers, &Rules::power()).await?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/powers",
    tag = "Powers",
    operation_id = "createPower",
    summary = "Create a power",
    description = "The description must be at least 10 characters long.",
    request_body = CreatePowerRequest,
    responses(
        (status = 201, description = "Power created"),
        (status = 400, description = "Missing fields or description too short", body = ErrorsBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_power(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePowerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new = validate_create_power(payload)?;
    let model = store::create_power(&state.db, new).await?;
    let body = serializer::serialize_one(&state.db, model, &Rules::power()).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/powers/{id}",
    tag = "Powers",
    operation_id = "getPower",
    summary = "Get a power by ID",
    params(("id" = i32, Path, description = "Power ID")),
    responses(
        (status = 200, description = "Power details"),
        (status = 404, description = "Power not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_power(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Value>, AppError> {
    let model = store::get_power(&state.db, id).await?;
    let body = serializer::serialize_one(&state.db, model, &Rules::power()).await?;
    Ok(Json(body))
}

#[utoipa::path(
    patch,
    path = "/powers/{id}",
    tag = "Powers",
    operation_id = "updatePower",
    summary = "Update a power's description",
    description = "Requires `description`, which must be at least 20 characters long. `name` may be changed alongside it.",
    params(("id" = i32, Path, description = "Power ID")),
    request_body = UpdatePowerRequest,
    responses(
        (status = 200, description = "Power updated"),
        (status = 400, description = "Description missing or too short", body = ErrorsBody),
        (status = 404, description = "Power not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_power(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePowerRequest>,
) -> Result<Json<Value>, AppError> {
    // An unknown id is reported before anything about the body.
    store::get_power(&state.db, id).await?;
    let changes = validate_update_power(payload)?;
    let model = store::update_power(&state.db, id, changes).await?;
    let body = serializer::serialize_one(&state.db, model, &Rules::power()).await?;
    Ok(Json(body))
}

#[utoipa::path(
    delete,
    path = "/powers/{id}",
    tag = "Powers",
    operation_id = "deletePower",
    summary = "Delete a power",
    description = "Deletes the power and, in the same transaction, every hero_power that references it.",
    params(("id" = i32, Path, description = "Power ID")),
    responses(
        (status = 204, description = "Power deleted"),
        (status = 404, description = "Power not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_power(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode, AppError> {
    store::delete_power(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
