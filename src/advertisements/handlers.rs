use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::basic::BasicAuth,
    auth::password::verify_password,
    error::ApiError,
    state::AppState,
    users::repo::User,
};

use super::dto::{AdvertisementResponse, CreateAdvertisementRequest, DeletedResponse};
use super::repo::Advertisement;

pub fn advertisement_routes() -> Router<AppState> {
    Router::new()
        .route("/advertisements/", post(create_advertisement))
        .route(
            "/advertisements/:advertisement_id",
            get(get_advertisement).delete(delete_advertisement),
        )
}

#[instrument(skip(state))]
pub async fn get_advertisement(
    State(state): State<AppState>,
    Path(advertisement_id): Path<i64>,
) -> Result<Json<AdvertisementResponse>, ApiError> {
    let ad = Advertisement::find_by_id(&state.db, advertisement_id)
        .await?
        .ok_or(ApiError::AdvertisementNotFound)?;

    Ok(Json(AdvertisementResponse {
        id: ad.id,
        title: ad.title,
        description: ad.description,
        user_id: ad.user_id,
    }))
}

#[instrument(skip(state, creds, payload))]
pub async fn create_advertisement(
    State(state): State<AppState>,
    BasicAuth(creds): BasicAuth,
    Json(payload): Json<CreateAdvertisementRequest>,
) -> Result<(StatusCode, Json<AdvertisementResponse>), ApiError> {
    if payload.title.trim().is_empty() || payload.description.trim().is_empty() {
        return Err(ApiError::Validation(
            "title and description must not be empty".into(),
        ));
    }
    if payload.user_id.is_some() {
        warn!("client-supplied user_id ignored, owner comes from credentials");
    }

    // Owner lookup and insert share one transaction.
    let mut tx = state.db.begin().await?;

    let user = User::find_by_name(&mut *tx, &creds.name)
        .await?
        .ok_or(ApiError::UserNotFound)?;
    if !verify_password(&creds.password, &user.password)? {
        warn!(name = %creds.name, "password mismatch on advertisement create");
        return Err(ApiError::InvalidCredentials);
    }

    let ad = Advertisement::create(&mut *tx, &payload.title, &payload.description, user.id).await?;
    tx.commit().await?;

    info!(advertisement_id = ad.id, user_id = user.id, "advertisement created");
    Ok((
        StatusCode::CREATED,
        Json(AdvertisementResponse {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            user_id: ad.user_id,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn delete_advertisement(
    State(state): State<AppState>,
    Path(advertisement_id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = Advertisement::delete(&state.db, advertisement_id)
        .await?
        .ok_or(ApiError::AdvertisementNotFound)?;

    info!(advertisement_id = id, "advertisement deleted");
    Ok(Json(DeletedResponse { id }))
}
