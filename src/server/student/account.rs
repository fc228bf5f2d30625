use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    response::{Html, Redirect, Response},
};

use crate::auth::{CredentialHasher, CurrentSession};
use crate::portal::accounts;
use crate::server::AppState;
use crate::server::dto::{LoginForm, RegisterForm};
use crate::server::login;
use crate::server::response::{PageError, PortalResultExt};
use crate::types::Role;
use crate::views;

pub async fn register_form() -> Html<String> {
    Html(views::student_register())
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, PageError> {
    accounts::register(
        state.store.as_ref(),
        &CredentialHasher::new(),
        Role::Student,
        form.email.as_deref(),
        form.name.as_deref(),
        form.password.as_deref(),
    )
    .or_page("Please fill all fields")?;

    Ok(Redirect::to(Role::Student.login_path()))
}

pub async fn login_form() -> Html<String> {
    Html(views::login(Role::Student))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    current: CurrentSession,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    login::submit(&state, current, Role::Student, form).await
}
