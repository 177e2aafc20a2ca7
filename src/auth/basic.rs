use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Extracts `Authorization: Basic <base64 name:password>` credentials.
///
/// Only decodes the header; looking the user up and checking the password
/// against the stored hash is the handler's job.
pub struct BasicAuth(pub Credentials);

/// Parse a Basic Authorization header value into credentials.
///
/// The scheme prefix is matched case-insensitively and the decoded payload
/// splits on the first `:`, so passwords may contain colons.
pub(crate) fn parse_basic_header(value: &str) -> Option<Credentials> {
    let (scheme, payload) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = BASE64.decode(payload.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (name, password) = decoded.split_once(':')?;
    Some(Credentials {
        name: name.to_string(),
        password: password.to_string(),
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for BasicAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::InvalidCredentials)?;
        let creds = parse_basic_header(header).ok_or(ApiError::InvalidCredentials)?;
        Ok(BasicAuth(creds))
    }
}
