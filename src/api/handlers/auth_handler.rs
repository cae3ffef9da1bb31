//! Authentication handlers.

use axum::{extract::State, response::Json, routing::{get, post}, Extension, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AdminSession;
use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;
use crate::errors::AppResult;

/// Admin login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Shared admin passphrase
    #[serde(default)]
    #[validate(length(min = 1, message = "passphrase is required"))]
    #[schema(example = "correct horse battery staple")]
    pub passphrase: String,
}

/// Login/logout acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    /// Session lifetime in seconds (login only)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 10800)]
    pub expires_in: Option<i64>,
}

/// Current admin session
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub authenticated: bool,
    /// Unix timestamp at which the session ends
    pub expires_at: i64,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Routes that report on the session; mounted behind the session middleware
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/session", get(session))
}

/// Log in with the admin passphrase
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = AuthResponse),
        (status = 400, description = "Malformed request"),
        (status = 401, description = "Invalid passphrase")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<AuthResponse>)> {
    let session = state.auth_service.login(&payload.passphrase).await?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, session.token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.settings.secure_cookies)
        .max_age(time::Duration::seconds(session.expires_in));

    Ok((
        jar.add(cookie),
        Json(AuthResponse {
            success: true,
            expires_in: Some(session.expires_in),
        }),
    ))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Session cookie cleared", body = AuthResponse)
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<AuthResponse>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"));

    (
        jar,
        Json(AuthResponse {
            success: true,
            expires_in: None,
        }),
    )
}

/// Report the current admin session
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "Authentication",
    responses(
        (status = 200, description = "Session is valid", body = SessionResponse),
        (status = 401, description = "No valid session")
    ),
    security(("session_cookie" = []))
)]
pub async fn session(Extension(session): Extension<AdminSession>) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: true,
        expires_at: session.expires_at,
    })
}
