use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};

use crate::auth::RequireStudent;
use crate::portal::{complaints, feedback, notices};
use crate::server::AppState;
use crate::server::dto::MessageForm;
use crate::server::response::{PageError, PortalResultExt};
use crate::types::Role;
use crate::views;

pub async fn dashboard(
    student: RequireStudent,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, PageError> {
    let notices = notices::list(state.store.as_ref())?;
    Ok(Html(views::student_dashboard(&student.email, &notices)))
}

pub async fn complaint_form(_student: RequireStudent) -> Html<String> {
    Html(views::complaint_form())
}

/// Files under the session's email; the form cannot name another student.
pub async fn file_complaint(
    student: RequireStudent,
    State(state): State<Arc<AppState>>,
    Form(form): Form<MessageForm>,
) -> Result<Redirect, PageError> {
    complaints::file(state.store.as_ref(), &student.email, form.message.as_deref())
        .or_page("Please enter a message")?;
    Ok(Redirect::to(Role::Student.dashboard_path()))
}

pub async fn feedback_form(_student: RequireStudent) -> Html<String> {
    Html(views::feedback_form())
}

pub async fn submit_feedback(
    student: RequireStudent,
    State(state): State<Arc<AppState>>,
    Form(form): Form<MessageForm>,
) -> Result<Redirect, PageError> {
    feedback::submit(state.store.as_ref(), &student.email, form.message.as_deref())
        .or_page("Please enter a message")?;
    Ok(Redirect::to(Role::Student.dashboard_path()))
}
