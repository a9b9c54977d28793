use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
};

use crate::api::rest::error::{from_parts, ProblemResponse};
use crate::contract::model::Requester;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_SERVICE_HEADER: &str = "x-user-service";

/// Requester identity forwarded by the authenticating proxy in `x-user-*` headers.
#[derive(Debug, Clone)]
pub struct AuthenticatedRequester(pub Requester);

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl<S> FromRequestParts<S> for AuthenticatedRequester
where
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header(&parts.headers, USER_ID_HEADER).ok_or_else(|| {
            from_parts(
                StatusCode::UNAUTHORIZED,
                "PINS_UNAUTHENTICATED",
                "Unauthenticated",
                format!("missing {USER_ID_HEADER} header"),
                parts.uri.path(),
            )
        })?;

        Ok(Self(Requester::new(
            user_id,
            header(&parts.headers, USER_NAME_HEADER).unwrap_or_default(),
            header(&parts.headers, USER_SERVICE_HEADER).unwrap_or_default(),
        )))
    }
}
