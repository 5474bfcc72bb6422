use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::UserPayload, repo_types::User};
use crate::{error::ApiError, state::AppState};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

#[instrument(skip(state, id))]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let id = user_id(id)?;
    let user = state.store.get(id).await?;
    Ok(Json(user))
}

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let payload = decode_payload(&body)?;
    let user = state.store.create(&payload).await?;
    info!(user_id = user.id, "user created");
    Ok(Json(user))
}

#[instrument(skip(state, id, body))]
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let payload = decode_payload(&body)?;
    let id = user_id(id)?;
    let user = state.store.update(id, &payload).await?;
    Ok(Json(user))
}

#[instrument(skip(state, id))]
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let id = user_id(id)?;
    state.store.delete(id).await?;
    info!(user_id = id, "user deleted");
    Ok(Json("User deleted"))
}

fn user_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::Path(rejection.body_text()))
}

/// Decodes the first JSON value of the body. Anything after it is not read.
fn decode_payload(body: &[u8]) -> Result<UserPayload, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<UserPayload>();
    match values.next() {
        Some(payload) => Ok(payload?),
        None => Err(ApiError::Decode(serde::de::Error::custom("empty request body"))),
    }
}
