use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::state::AppState;

use super::dto::{Envelope, ListUsersQuery, UserPayload};
use super::error::ApiError;
use super::repo::{UserFilter, UserRecord};
use super::validate::validate_payload;

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
}

// --- handlers ---

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<Envelope<UserRecord>>), ApiError> {
    validate_payload(&payload)?;
    let user = state.store.insert(payload.into()).await?;
    info!(user_id = %user.id, "user created");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("User created successfully", user)),
    ))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(q): Query<ListUsersQuery>,
) -> Result<Json<Envelope<Vec<UserRecord>>>, ApiError> {
    let filter = UserFilter {
        age_above: q.age,
        rating_above: q.rating,
    };
    let users = state.store.list(filter).await?;
    Ok(Json(Envelope::ok("Users fetched successfully", users)))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<UserRecord>>, ApiError> {
    let user = state
        .store
        .get(id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    Ok(Json(Envelope::ok("User fetched successfully", user)))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<Envelope<UserRecord>>, ApiError> {
    validate_payload(&payload)?;
    let user = state
        .store
        .replace(id, payload.into())
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    info!(user_id = %user.id, "user updated");
    Ok(Json(Envelope::ok("User updated successfully", user)))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<UserRecord>>, ApiError> {
    let user = state
        .store
        .delete(id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    info!(user_id = %user.id, "user deleted");
    Ok(Json(Envelope::ok("User deleted successfully", user)))
}
