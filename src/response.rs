//! Response helpers for the status shapes the API uses.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 201 with a `Location` header and the created entity as body.
pub fn created<T: Serialize>(location: &str, data: T) -> Response {
    let mut resp = (StatusCode::CREATED, Json(data)).into_response();
    if let Ok(value) = HeaderValue::from_str(location) {
        resp.headers_mut().insert(header::LOCATION, value);
    }
    resp
}

/// 200 with the entity, or 200 with an empty body when there is none.
pub fn ok_or_empty<T: Serialize>(data: Option<T>) -> Response {
    match data {
        Some(d) => (StatusCode::OK, Json(d)).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
