use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use super::guard::{Access, require_role};
use super::session::{SessionUser, current_user};
use crate::server::AppState;
use crate::types::Role;

/// The caller's session and who it is bound to. Never rejects on a missing or
/// stale cookie; those read as anonymous.
pub struct CurrentSession {
    pub session: Session,
    pub user: Option<SessionUser>,
}

/// Extractor that requires a student session. Yields the student's email.
pub struct RequireStudent {
    pub email: String,
}

/// Extractor that requires an admin session. Yields the admin's email.
pub struct RequireAdmin {
    pub email: String,
}

#[derive(Debug)]
pub enum GuardError {
    /// Caller lacks the role; sent to that role's login form.
    Denied(&'static str),
    InternalError,
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        match self {
            GuardError::Denied(login_path) => Redirect::to(login_path).into_response(),
            GuardError::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl FromRequestParts<Arc<AppState>> for CurrentSession {
    type Rejection = GuardError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            tracing::error!("Session layer missing for {}", parts.uri.path());
            return Err(GuardError::InternalError);
        };

        let user = current_user(&session).await.map_err(|e| {
            tracing::error!("Failed to load session: {e}");
            GuardError::InternalError
        })?;

        Ok(CurrentSession { session, user })
    }
}

impl FromRequestParts<Arc<AppState>> for RequireStudent {
    type Rejection = GuardError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let user = require(parts, state, Role::Student).await?;
        Ok(RequireStudent { email: user.email })
    }
}

impl FromRequestParts<Arc<AppState>> for RequireAdmin {
    type Rejection = GuardError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let user = require(parts, state, Role::Admin).await?;
        Ok(RequireAdmin { email: user.email })
    }
}

async fn require(
    parts: &mut Parts,
    state: &Arc<AppState>,
    role: Role,
) -> Result<SessionUser, GuardError> {
    let current = CurrentSession::from_request_parts(parts, state).await?;

    match (require_role(current.user.as_ref(), role), current.user) {
        (Access::Allowed, Some(user)) => Ok(user),
        (Access::Denied { redirect }, _) => {
            tracing::debug!("Denied {} {} without {role} session", parts.method, parts.uri.path());
            Err(GuardError::Denied(redirect))
        }
        (Access::Allowed, None) => Err(GuardError::Denied(role.login_path())),
    }
}
