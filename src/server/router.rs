use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, routing::get};
use chrono::Duration;

use super::admin::admin_router;
use super::public;
use super::student::student_router;
use crate::auth::session::session_layer;
use crate::config::ServerConfig;
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Lifetime of a session, counted from login.
    pub session_ttl: Duration,
    /// Adds `Secure` to session cookies.
    pub secure_cookies: bool,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: &ServerConfig) -> Self {
        Self {
            store,
            session_ttl: config.session_ttl,
            secure_cookies: config.secure_cookies,
        }
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let sessions = session_layer(state.store.clone(), state.secure_cookies);

    Router::new()
        .route("/", get(public::home))
        .route("/health", get(public::health))
        .route("/logout", get(public::logout))
        .merge(student_router())
        .merge(admin_router())
        .layer(sessions)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::store::SqliteStore;

    fn app() -> Router {
        let store = SqliteStore::in_memory().unwrap();
        store.initialize().unwrap();
        let state = Arc::new(AppState::new(Arc::new(store), &ServerConfig::default()));
        create_router(state)
    }

    async fn get_location(app: Router, uri: &str) -> (StatusCode, Option<String>) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        (response.status(), location)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _) = get_location(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_every_protected_route_redirects_anonymous() {
        let cases = [
            ("/student_dashboard", "/student_login"),
            ("/student_complaint", "/student_login"),
            ("/student_feedback", "/student_login"),
            ("/admin_dashboard", "/admin_login"),
            ("/add_notice", "/admin_login"),
            ("/view_notices_admin", "/admin_login"),
            ("/delete_notice/abc", "/admin_login"),
            ("/delete_all_notices", "/admin_login"),
            ("/view_complaints", "/admin_login"),
            ("/update_complaint/abc", "/admin_login"),
            ("/view_feedback", "/admin_login"),
        ];

        for (uri, login) in cases {
            let (status, location) = get_location(app(), uri).await;
            assert_eq!(status, StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location.as_deref(), Some(login), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_cookie_is_anonymous() {
        let response = app()
            .oneshot(
                Request::get("/admin_dashboard")
                    .header(header::COOKIE, "noticeboard_session=forged")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/admin_login");
    }

    #[tokio::test]
    async fn test_anonymous_post_is_redirected_before_body_is_read() {
        let response = app()
            .oneshot(
                Request::post("/add_notice")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("title=Exam&message=Monday"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/admin_login");
    }
}
