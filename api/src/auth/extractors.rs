use axum::{
    Json,
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use util::config;

use crate::auth::claims::{AuthUser, Claims};
use crate::response::ApiResponse;

#[derive(serde::Serialize, Default)]
pub struct Empty;

pub type AuthRejection = (StatusCode, Json<ApiResponse<Empty>>);

fn unauthorized(message: &str) -> AuthRejection {
    (StatusCode::UNAUTHORIZED, Json(ApiResponse::error(message)))
}

/// Verifies an HS256 token against the configured secret.
pub fn decode_token(token: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .ok()
    .map(|data| data.claims)
}

/// Extracts `AuthUser` from a `Bearer` token in the `Authorization` header.
///
/// # Errors
/// - `401 Unauthorized` if the header is missing or malformed, or the token
///   is invalid or expired.
///
/// # Example
/// ```ignore
/// async fn protected_route(user: AuthUser) -> impl IntoResponse {
///     // User is now available
/// }
/// ```
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            <TypedHeader<Authorization<Bearer>> as FromRequestParts<S>>::from_request_parts(
                parts, state,
            )
            .await
            .map_err(|_| unauthorized("Missing or invalid Authorization header"))?;

        let claims =
            decode_token(bearer.token()).ok_or_else(|| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser(claims))
    }
}

/// `Option<AuthUser>`: `None` for anonymous requests (no `Authorization`
/// header). A header that is present but invalid is still rejected with 401.
impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(None);
        }
        <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state)
            .await
            .map(Some)
    }
}
