//! Session cookie extractors.
//!
//! The session token travels in the `ecobot_session` cookie. [`Session`]
//! rejects the request with 401 when no live session exists; [`MaybeSession`]
//! is for routes where a session is optional (classify, logout, home state).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use ecobot_core::session::SessionStore;
use ecobot_types::session::SessionId;
use ecobot_types::user::User;

use crate::http::error::AppError;
use crate::state::AppState;

/// Name of the browser session cookie.
pub const SESSION_COOKIE: &str = "ecobot_session";

/// An active session: the token plus the stored user copy.
pub struct Session {
    pub id: SessionId,
    pub user: User,
}

/// An optional session. Extraction never fails.
pub struct MaybeSession(pub Option<Session>);

/// Read and resolve the session cookie from request parts, if any.
fn lookup_session(parts: &Parts, state: &AppState) -> Option<Session> {
    let jar = CookieJar::from_headers(&parts.headers);
    let id: SessionId = jar.get(SESSION_COOKIE)?.value().parse().ok()?;
    let user = state.sessions.get(&id)?;
    Some(Session { id, user })
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        lookup_session(parts, state).ok_or(AppError::NotLoggedIn)
    }
}

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(lookup_session(parts, state)))
    }
}
