use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{auth::password::hash_password, error::ApiError, state::AppState};

use super::dto::{CreateUserRequest, CreatedUserResponse, UserResponse};
use super::repo::User;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(create_user))
        .route("/users/:user_id", get(get_user))
}

pub(crate) fn is_valid_name(name: &str) -> bool {
    lazy_static! {
        static ref NAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_.-]{1,64}$").unwrap();
    }
    NAME_RE.is_match(name)
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(UserResponse {
        id: user.id,
        name: user.name,
        creation_time: user.creation_time.unix_timestamp(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), ApiError> {
    if !is_valid_name(&payload.name) {
        warn!(name = %payload.name, "invalid user name");
        return Err(ApiError::Validation("invalid user name".into()));
    }
    if payload.password.is_empty() {
        warn!(name = %payload.name, "empty password");
        return Err(ApiError::Validation("password must not be empty".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.name, &hash).await?;

    info!(user_id = user.id, name = %user.name, "user created");
    Ok((StatusCode::CREATED, Json(CreatedUserResponse { id: user.id })))
}
