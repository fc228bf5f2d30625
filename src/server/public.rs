use axum::response::{Html, Redirect};

use crate::auth::CurrentSession;
use crate::auth::session::sign_out;
use crate::views;

pub async fn home() -> Html<String> {
    Html(views::home())
}

pub async fn health() -> &'static str {
    "OK"
}

/// Drops the caller's session whatever role it held, then goes home.
pub async fn logout(current: CurrentSession) -> Redirect {
    match sign_out(&current.session).await {
        Ok(Some(user)) => tracing::info!("{} {} logged out", user.role, user.email),
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to delete session on logout: {e}"),
    }

    Redirect::to("/")
}
