use serde::{Deserialize, Serialize};

/// Request body for advertisement creation.
///
/// `user_id` is accepted for wire compatibility but ignored: the owner is
/// always the user resolved from the Authorization header.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAdvertisementRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct AdvertisementResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: i64,
}
