use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::contract::error::PinsError;
use crate::domain::error::DomainError;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// RFC 9457 Problem Details for HTTP APIs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem", description = "RFC 9457 Problem Details for HTTP APIs")]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    pub status: u16,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// A URI reference that identifies the specific occurrence of the problem.
    pub instance: String,
    /// Machine-readable error code.
    pub code: String,
    /// Id of the tracing span that produced the problem, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Axum response wrapper that renders `Problem` with correct status & content type.
#[derive(Debug, Clone)]
pub struct ProblemResponse(pub Problem);

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut resp = axum::Json(self.0).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    ProblemResponse(Problem {
        type_url: format!("https://errors.pinboard.local/{code}"),
        title: title.to_string(),
        status: status.as_u16(),
        detail: detail.into(),
        instance: instance.to_string(),
        code: code.to_string(),
        trace_id: tracing::Span::current()
            .id()
            .map(|id| id.into_u64().to_string()),
    })
}

/// Failure of a pin endpoint: either a bare status with no body, or a problem document.
#[derive(Debug)]
pub enum ApiError {
    NoBody(StatusCode),
    Problem(ProblemResponse),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NoBody(status) => status.into_response(),
            ApiError::Problem(p) => p.into_response(),
        }
    }
}

impl From<ProblemResponse> for ApiError {
    fn from(p: ProblemResponse) -> Self {
        ApiError::Problem(p)
    }
}

/// Map a domain failure to the endpoint's response.
///
/// Missing pins, repeated saves, non-owner tag edits and empty update results
/// end with no body. Store failures carry the store's error text.
pub fn map_domain_error(e: DomainError, instance: &str) -> ApiError {
    debug!(error = %e, "Pin operation failed");
    match PinsError::from(e) {
        PinsError::NotFound { .. } => ApiError::NoBody(StatusCode::NOT_FOUND),
        PinsError::Forbidden { .. } => ApiError::NoBody(StatusCode::FORBIDDEN),
        PinsError::UpdateFailed { .. } => ApiError::NoBody(StatusCode::CONFLICT),
        PinsError::Transport { message } => {
            error!(error = %message, "Pin store call failed");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PINS_TRANSPORT",
                "Transport error",
                message,
                instance,
            )
            .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_into_response_sets_status_and_content_type() {
        let resp = from_parts(StatusCode::BAD_REQUEST, "X", "Bad", "detail", "/pins/1")
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let ct = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }

    #[test]
    fn no_body_kinds_map_to_distinct_statuses() {
        let cases = [
            (DomainError::pin_not_found("1"), StatusCode::NOT_FOUND),
            (DomainError::already_saved("1", "u"), StatusCode::NOT_FOUND),
            (DomainError::not_owner("1", "u"), StatusCode::FORBIDDEN),
            (DomainError::update_failed("1"), StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            match map_domain_error(err, "/pins/1") {
                ApiError::NoBody(s) => assert_eq!(s, status),
                other => panic!("expected no-body response, got {other:?}"),
            }
        }
    }

    #[test]
    fn transport_error_keeps_message() {
        match map_domain_error(DomainError::repository("Mocked rejection"), "/pins/1") {
            ApiError::Problem(p) => {
                assert_eq!(p.0.status, 500);
                assert_eq!(p.0.detail, "Mocked rejection");
                assert_eq!(p.0.instance, "/pins/1");
            }
            other => panic!("expected problem, got {other:?}"),
        }
    }
}
