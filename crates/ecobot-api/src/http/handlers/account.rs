//! Account handlers: signup, login, logout, and session-state lookup.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use serde::Serialize;

use ecobot_core::session::SessionStore;
use ecobot_types::session::SessionId;
use ecobot_types::user::{LoginRequest, SignupRequest, User};

use crate::http::error::AppError;
use crate::http::extract::{MaybeSession, SESSION_COOKIE};
use crate::state::AppState;

/// Body of successful signup/login responses.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

/// Body of `POST /logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Body of `GET /me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Option<User>,
}

fn session_cookie(id: SessionId) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .build()
}

/// POST /signup - Create a user, persist it, and start a session.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SignupRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let user = state
        .account_service
        .signup(&body.name, &body.email, &body.password)
        .await?;

    let id = state.sessions.create(user.clone());
    let jar = jar.add(session_cookie(id));

    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            message: "Signup successful!".to_string(),
            user,
        }),
    ))
}

/// POST /login - Check credentials and start a session.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let user = state
        .account_service
        .login(&body.email, &body.password)
        .await?;

    let id = state.sessions.create(user.clone());
    let jar = jar.add(session_cookie(id));

    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            message: "Login successful!".to_string(),
            user,
        }),
    ))
}

/// POST /logout - Destroy the session, if any, and drop the cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    MaybeSession(session): MaybeSession,
) -> (CookieJar, Json<LogoutResponse>) {
    if let Some(session) = session {
        state.sessions.destroy(&session.id);
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());

    (
        jar,
        Json(LogoutResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// GET /me - The session's user copy, or null when anonymous.
///
/// The browser widget uses this to render logged-in state on page load.
pub async fn me(MaybeSession(session): MaybeSession) -> Json<MeResponse> {
    Json(MeResponse {
        user: session.map(|s| s.user),
    })
}
