//! Middleware for session token validation
//!
//! Every protected route goes through `session_auth`, which resolves the
//! bearer token against the sessions table and attaches the resulting
//! identity to the request. Handlers never see client-asserted identity
//! fields.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::error;

use crate::{error::ApiError, state::AppState};

/// Resolve the bearer token to a server-side session and attach the
/// identity to the request extensions
pub async fn session_auth(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(ApiError::Unauthorized)?;

    let identity = state
        .sessions
        .find_identity(bearer.token())
        .await
        .map_err(|e| {
            error!("Failed to resolve session: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::Unauthorized)?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
