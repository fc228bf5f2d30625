use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::session::{SessionUser, sign_in};
use crate::auth::{CredentialHasher, CurrentSession};
use crate::error::Error;
use crate::portal::accounts;
use crate::server::AppState;
use crate::server::dto::LoginForm;
use crate::server::response::{PageError, PortalResultExt};
use crate::types::Role;

fn rejected_message(role: Role) -> &'static str {
    match role {
        Role::Student => "Invalid Student Login",
        Role::Admin => "Invalid Admin Login",
    }
}

/// Authenticates against the role's collection and starts a fresh session.
///
/// Whatever session the client already holds is replaced, so a session never
/// carries more than one role.
pub async fn submit(
    state: &AppState,
    current: CurrentSession,
    role: Role,
    form: LoginForm,
) -> Result<Response, PageError> {
    let hasher = CredentialHasher::new();
    match accounts::authenticate(
        state.store.as_ref(),
        &hasher,
        role,
        form.email.as_deref(),
        form.password.as_deref(),
    ) {
        Err(Error::AuthRejected) => return Err(PageError::unauthorized(rejected_message(role))),
        other => other.or_page("Please enter both email and password")?,
    }

    // Presence was checked by authenticate
    let email = form.email.unwrap_or_default();

    if let Some(previous) = &current.user {
        tracing::debug!("Replacing {} session of {}", previous.role, previous.email);
    }

    let user = SessionUser {
        role,
        email: email.clone(),
    };
    sign_in(&current.session, user, state.session_ttl)
        .await
        .map_err(PageError::from)?;

    tracing::info!("{role} {email} logged in");

    Ok(Redirect::to(role.dashboard_path()).into_response())
}
