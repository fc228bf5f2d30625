mod account;
mod complaints;
mod feedback;
mod notices;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::server::AppState;

// Deletion and resolution are plain GET links, so both stay idempotent.
pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin_login", get(account::login_form).post(account::login))
        .route("/admin_dashboard", get(account::dashboard))
        // Notice routes
        .route(
            "/add_notice",
            get(notices::add_notice_form).post(notices::add_notice),
        )
        .route("/view_notices_admin", get(notices::list_notices))
        .route("/delete_notice/{id}", get(notices::delete_notice))
        .route("/delete_all_notices", get(notices::delete_all_notices))
        // Complaint routes
        .route("/view_complaints", get(complaints::list_complaints))
        .route("/update_complaint/{id}", get(complaints::resolve_complaint))
        // Feedback routes
        .route("/view_feedback", get(feedback::list_feedback))
}
