use serde::{Deserialize, Serialize};

/// Request body for user creation. Unknown fields are rejected rather than
/// silently passed through to the store.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
}

/// Public view of a user; `creation_time` is epoch seconds.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub creation_time: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub id: i64,
}
