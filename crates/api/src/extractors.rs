//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::Deserialize;
use serde_json::Value;
use starblog_common::AppError;
use validator::Validate;

const MISSING_USER_ID: &str = "user_id is required in request body";

/// Integer ID captured from the route path.
///
/// A segment that is not an `i32` means no resource matched, so it is
/// rejected as not found.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;
        Ok(Self(id))
    }
}

/// Body of the favorite mutation routes.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct FavoriteRequest {
    /// User whose favorites change.
    #[validate(required(message = "user_id is required in request body"))]
    pub user_id: Option<i32>,
}

/// The `user_id` named in a favorite mutation body.
///
/// An absent, empty or `null` body, or an object without `user_id`, is
/// rejected with a validation error rather than a parse error.
#[derive(Debug, Clone, Copy)]
pub struct FavoriteUser(pub i32);

impl<S> FromRequest<S> for FavoriteUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let body = parse_favorite_request(&bytes)?;
        body.validate()?;

        body.user_id
            .map(Self)
            .ok_or_else(|| AppError::Validation(MISSING_USER_ID.to_string()))
    }
}

fn parse_favorite_request(bytes: &[u8]) -> Result<FavoriteRequest, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(FavoriteRequest::default());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

    match value {
        Value::Null => Ok(FavoriteRequest::default()),
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}"))),
        _ => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}
