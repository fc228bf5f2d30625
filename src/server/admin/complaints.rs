use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};

use crate::auth::RequireAdmin;
use crate::portal::complaints;
use crate::server::AppState;
use crate::server::response::PageError;
use crate::views;

pub async fn list_complaints(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, PageError> {
    let complaints = complaints::list(state.store.as_ref())?;
    Ok(Html(views::complaints(&complaints)))
}

pub async fn resolve_complaint(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    complaints::resolve(state.store.as_ref(), &id)?;
    Ok(Redirect::to("/view_complaints"))
}
