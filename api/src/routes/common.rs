//! Helpers shared by every resource handler: field-error collection, the
//! standard status responses, and JSON body parsing.

use crate::response::ApiResponse;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use validator::{Validate, ValidationErrors};

/// Handlers return the success response in `Ok` and any early exit
/// (400/404/500) in `Err`, so `?` can short-circuit.
pub type ApiResult = Result<Response, Response>;

/// Validation failures keyed by field name.
///
/// Serialized as `{ "field": ["message", ...] }` in the `data` of a
/// `400 Bad Request`.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the `validator` rules of `req` and collects their messages.
    pub fn of<T: Validate>(req: &T) -> Self {
        match req.validate() {
            Ok(()) => Self::new(),
            Err(errors) => Self::from(&errors),
        }
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_default().push(message.into());
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All messages joined in field order.
    pub fn message(&self) -> String {
        self.0
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `Ok(())` when nothing was collected, otherwise the 400 response.
    pub fn check(self) -> Result<(), Response> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into_response())
        }
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = Self::new();
        for (field, errs) in errors.field_errors() {
            for e in errs.iter() {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                out.add(&field, message);
            }
        }
        out
    }
}

impl IntoResponse for FieldErrors {
    fn into_response(self) -> Response {
        let message = self.message();
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error_with_data(self, message)),
        )
            .into_response()
    }
}

/// Message for a foreign key that points at nothing the caller may use.
pub fn invalid_pk(id: i64) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

pub fn ok<T: Serialize>(data: T, message: &str) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data, message))).into_response()
}

/// `201 Created` with a `Location` header pointing at the new resource.
pub fn created<T: Serialize>(location: String, data: T, message: &str) -> Response {
    (
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(ApiResponse::success(data, message)),
    )
        .into_response()
}

pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

pub fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::error(message))).into_response()
}

/// Logs the failure and hides its details from the client.
pub fn internal_error(context: &str, err: impl Display) -> Response {
    tracing::error!(error = %err, "{context}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("Internal server error")),
    )
        .into_response()
}

/// Unwraps a JSON body, turning a malformed payload into a 400.
pub fn parse_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(bad_request(rejection.body_text())),
    }
}
