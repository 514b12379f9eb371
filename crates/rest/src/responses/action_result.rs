//! Controller outcomes.
//!
//! [`ActionResult`] is what every [`AdvisorController`](crate::controller::AdvisorController)
//! operation produces. "Not found" is a variant, not an error, so callers
//! branch on it structurally.

use advisor_persistence::AdvisorId;
use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{RestError, RestResult};
use crate::responses::headers::location_for;

/// Outcome of a controller operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T> {
    /// 200 with a payload.
    Ok(T),
    /// 200 with an empty body.
    OkEmpty,
    /// 201 with the created payload and a reference to the action that reads it.
    Created(CreatedAtAction<T>),
    /// 404 with an empty body.
    NotFound,
}

/// A created resource plus the route it can be read back from.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedAtAction<T> {
    /// Name of the controller action that reads the resource back.
    pub action_name: &'static str,
    /// Route value passed to that action.
    pub route_id: AdvisorId,
    /// The created resource.
    pub value: T,
}

impl<T> CreatedAtAction<T> {
    /// Absolute URL of the created resource.
    pub fn location(&self, base_url: &str) -> String {
        location_for(base_url, self.route_id)
    }
}

impl<T> ActionResult<T> {
    /// HTTP status this outcome maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActionResult::Ok(_) | ActionResult::OkEmpty => StatusCode::OK,
            ActionResult::Created(_) => StatusCode::CREATED,
            ActionResult::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Returns the payload, if this outcome carries one.
    pub fn value(&self) -> Option<&T> {
        match self {
            ActionResult::Ok(value) => Some(value),
            ActionResult::Created(created) => Some(&created.value),
            ActionResult::OkEmpty | ActionResult::NotFound => None,
        }
    }

    /// Consumes the outcome and returns the payload, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            ActionResult::Ok(value) => Some(value),
            ActionResult::Created(created) => Some(created.value),
            ActionResult::OkEmpty | ActionResult::NotFound => None,
        }
    }

    /// Returns true for the not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ActionResult::NotFound)
    }
}

impl<T: Serialize> ActionResult<T> {
    /// Renders the outcome as an HTTP response.
    ///
    /// `base_url` is used for the `Location` header of a created resource.
    pub fn into_http_response(self, base_url: &str) -> RestResult<Response> {
        let status = self.status_code();
        match self {
            ActionResult::Ok(value) => Ok((status, Json(value)).into_response()),
            ActionResult::OkEmpty | ActionResult::NotFound => Ok(status.into_response()),
            ActionResult::Created(created) => {
                let location = created.location(base_url);
                let mut headers = HeaderMap::new();
                headers.insert(
                    header::LOCATION,
                    HeaderValue::from_str(&location).map_err(|_| RestError::InternalError {
                        message: format!("Invalid Location header: {}", location),
                    })?,
                );
                Ok((status, headers, Json(created.value)).into_response())
            }
        }
    }
}
