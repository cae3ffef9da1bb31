//! Admin session middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;
use crate::errors::AppError;

/// Verified admin session, available to handlers as a request extension
#[derive(Clone, Debug)]
pub struct AdminSession {
    /// Unix timestamp after which the session cookie is rejected
    pub expires_at: i64,
}

/// Session authentication middleware.
///
/// Reads the session cookie, verifies the signed token it carries and
/// injects the [`AdminSession`] into the request extensions. Any failure
/// is a plain 401 so callers cannot tell a forged token from an expired one.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_session(&token).map_err(|e| {
        tracing::debug!(error = %e, "Admin session rejected");
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(AdminSession {
        expires_at: claims.exp,
    });

    Ok(next.run(request).await)
}
