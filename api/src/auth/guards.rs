//! Route-level permission guards.
//!
//! Course, lecture and task routes use [`allow_lecturer_or_get`]. Task
//! control and comment routes are open and carry no guard; the handlers
//! still scope what the caller can see.

use crate::auth::claims::AuthUser;
use crate::auth::extractors::AuthRejection;
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};

fn is_safe(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Helper to extract and validate the user, then insert it back into the request.
async fn extract_and_insert_authuser(
    mut req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), AuthRejection> {
    let (mut parts, body) = req.into_parts();
    let user = <AuthUser as FromRequestParts<()>>::from_request_parts(&mut parts, &()).await?;

    req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Safe methods pass for anyone. Writes require a valid token carrying the
/// lecturer claim.
///
/// - `401 Unauthorized` for a write without a valid token.
/// - `403 Forbidden` for a write by a non-lecturer.
pub async fn allow_lecturer_or_get(
    req: Request<Body>,
    next: Next,
) -> Result<Response, AuthRejection> {
    if is_safe(req.method()) {
        return Ok(next.run(req).await);
    }

    let (req, user) = extract_and_insert_authuser(req).await?;

    if !user.0.lecturer {
        tracing::debug!(user = user.user_id(), method = %req.method(), "Lecturer access required");
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Lecturer access required")),
        ));
    }

    Ok(next.run(req).await)
}
