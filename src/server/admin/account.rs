use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    response::{Html, Response},
};

use crate::auth::{CurrentSession, RequireAdmin};
use crate::server::AppState;
use crate::server::dto::LoginForm;
use crate::server::login;
use crate::server::response::PageError;
use crate::types::Role;
use crate::views;

pub async fn login_form() -> Html<String> {
    Html(views::login(Role::Admin))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    current: CurrentSession,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    login::submit(&state, current, Role::Admin, form).await
}

pub async fn dashboard(admin: RequireAdmin) -> Html<String> {
    Html(views::admin_dashboard(&admin.email))
}
