//! Extractors that report bad input as 422 responses with field-level detail.
//!
//! axum's own `Json`, `Query` and `Path` reject with plain-text 4xx bodies;
//! these wrappers run the same extraction, then [`Validate`], and fold every
//! failure into [`ApiError::Validation`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{FieldError, Validate};

/// JSON request body, deserialized and validated
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        validated(value).map(ValidJson)
    }
}

/// Query string, deserialized and validated
#[derive(Debug, Clone, Copy)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_rejection)?;
        validated(value).map(ValidQuery)
    }
}

/// Path parameters; a segment that doesn't parse is a 422 instead of a 400
#[derive(Debug, Clone, Copy)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ValidPath(value))
            .map_err(path_rejection)
    }
}

fn validated<T: Validate>(value: T) -> Result<T, ApiError> {
    let errors = value.validate();
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(ApiError::Validation(errors))
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            ApiError::Validation(vec![field_error("body", &err.body_text())])
        }
        JsonRejection::JsonSyntaxError(err) => ApiError::Validation(vec![FieldError::new(
            &["body"],
            err.body_text(),
            "json_invalid",
        )]),
        other => ApiError::Rejected {
            status: other.status(),
            message: other.body_text(),
        },
    }
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    match rejection {
        QueryRejection::FailedToDeserializeQueryString(err) => {
            ApiError::Validation(vec![field_error("query", &err.body_text())])
        }
        other => ApiError::Rejected {
            status: other.status(),
            message: other.body_text(),
        },
    }
}

fn path_rejection(rejection: PathRejection) -> ApiError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => ApiError::Validation(vec![
            FieldError::new(&["path"], err.body_text(), "parsing"),
        ]),
        other => ApiError::Rejected {
            status: other.status(),
            message: other.body_text(),
        },
    }
}

/// Turns a deserializer message such as
/// "Failed to deserialize ...: jersey_number: invalid type: string, expected i32"
/// or "...: missing field `full_name`" into a located [`FieldError`].
fn field_error(location: &str, text: &str) -> FieldError {
    let detail = text.split_once("type: ").map_or(text, |(_, rest)| rest);
    let detail = text
        .split_once("query string: ")
        .map_or(detail, |(_, rest)| rest);

    let (path, reason) = match detail.split_once(": ") {
        Some((path, reason)) if !path.is_empty() && !path.contains(char::is_whitespace) => {
            (Some(path.trim_start_matches('.')), reason)
        }
        _ => (None, detail),
    };

    if let Some(rest) = reason.strip_prefix("missing field `") {
        let field = rest.split('`').next().unwrap_or_default();
        return FieldError::new(&[location, field], "Field required", "missing");
    }

    match path.filter(|p| !p.is_empty()) {
        Some(path) => FieldError::new(&[location, path], strip_position(reason), "type_error"),
        None => FieldError::new(&[location], strip_position(reason), "value_error"),
    }
}

fn strip_position(reason: &str) -> &str {
    reason
        .rsplit_once(" at line ")
        .map_or(reason, |(msg, _)| msg)
}
