use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};

use crate::auth::RequireAdmin;
use crate::portal::notices;
use crate::server::AppState;
use crate::server::dto::NoticeForm;
use crate::server::response::{PageError, PortalResultExt};
use crate::types::Role;
use crate::views;

const NOTICES_PATH: &str = "/view_notices_admin";

pub async fn add_notice_form(_admin: RequireAdmin) -> Html<String> {
    Html(views::add_notice())
}

pub async fn add_notice(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Form(form): Form<NoticeForm>,
) -> Result<Redirect, PageError> {
    notices::publish(
        state.store.as_ref(),
        form.title.as_deref(),
        form.message.as_deref(),
    )
    .or_page("Please enter both title and message")?;

    Ok(Redirect::to(Role::Admin.dashboard_path()))
}

pub async fn list_notices(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, PageError> {
    let notices = notices::list(state.store.as_ref())?;
    Ok(Html(views::notices_admin(&notices)))
}

pub async fn delete_notice(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    notices::delete(state.store.as_ref(), &id)?;
    Ok(Redirect::to(NOTICES_PATH))
}

pub async fn delete_all_notices(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
) -> Result<Redirect, PageError> {
    notices::delete_all(state.store.as_ref())?;
    Ok(Redirect::to(NOTICES_PATH))
}
