use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
};

use crate::auth::RequireAdmin;
use crate::portal::feedback;
use crate::server::AppState;
use crate::server::response::PageError;
use crate::views;

pub async fn list_feedback(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, PageError> {
    let entries = feedback::list(state.store.as_ref())?;
    Ok(Html(views::feedback(&entries)))
}
