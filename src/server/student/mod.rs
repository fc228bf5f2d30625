mod account;
mod pages;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::server::AppState;

pub fn student_router() -> Router<Arc<AppState>> {
    Router::new()
        // Open routes
        .route(
            "/student_register",
            get(account::register_form).post(account::register),
        )
        .route("/student_login", get(account::login_form).post(account::login))
        // Student-only routes
        .route("/student_dashboard", get(pages::dashboard))
        .route(
            "/student_complaint",
            get(pages::complaint_form).post(pages::file_complaint),
        )
        .route(
            "/student_feedback",
            get(pages::feedback_form).post(pages::submit_feedback),
        )
}
