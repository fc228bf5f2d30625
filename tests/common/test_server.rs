use std::sync::Arc;

use reqwest::header::{COOKIE, LOCATION};
use reqwest::{Response, StatusCode, redirect};
use tempfile::TempDir;
use tokio::task::JoinHandle;

use noticeboard::auth::CredentialHasher;
use noticeboard::auth::session::SESSION_COOKIE;
use noticeboard::config::ServerConfig;
use noticeboard::portal::bootstrap::ensure_seed_admin;
use noticeboard::server::{AppState, create_router};
use noticeboard::store::{SqliteStore, Store};

pub const SEED_EMAIL: &str = "admin@gmail.com";
pub const SEED_PASSWORD: &str = "admin123";

/// A server bound to an ephemeral port, backed by a fresh database.
pub struct TestServer {
    pub temp_dir: TempDir,
    pub base_url: String,
    pub store: Arc<SqliteStore>,
    client: reqwest::Client,
    server_task: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config = ServerConfig {
            data_dir: temp_dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        let store = Arc::new(SqliteStore::new(config.db_path()).expect("open store"));
        store.initialize().expect("initialize store");
        ensure_seed_admin(store.as_ref(), &CredentialHasher::new(), &config.seed_admin)
            .expect("seed admin");

        let state = Arc::new(AppState::new(store.clone(), &config));
        let app = create_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let port = listener.local_addr().expect("local addr").port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let server_task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("build client");

        Self {
            temp_dir,
            base_url,
            store,
            client,
            server_task,
        }
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        request.send().await.expect("send GET")
    }

    pub async fn post_form(&self, path: &str, cookie: Option<&str>, form: &[(&str, &str)]) -> Response {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .form(form);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        request.send().await.expect("send POST")
    }

    pub async fn register_student(&self, name: &str, email: &str, password: &str) {
        let resp = self
            .post_form(
                "/student_register",
                None,
                &[("name", name), ("email", email), ("password", password)],
            )
            .await;
        assert_redirect(&resp, "/student_login");
    }

    /// Logs in and returns the `Cookie` header value for the new session.
    pub async fn login(&self, path: &str, email: &str, password: &str, cookie: Option<&str>) -> String {
        let resp = self
            .post_form(path, cookie, &[("email", email), ("password", password)])
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "login to {path} failed");
        session_cookie(&resp).expect("session cookie")
    }

    pub async fn student_session(&self, email: &str) -> String {
        self.register_student("Student", email, "pw1").await;
        self.login("/student_login", email, "pw1", None).await
    }

    pub async fn admin_session(&self) -> String {
        self.login("/admin_login", SEED_EMAIL, SEED_PASSWORD, None).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server_task.abort();
    }
}

/// The session cookie set by a response, as a `Cookie` header value.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.cookies()
        .find(|c| c.name() == SESSION_COOKIE && !c.value().is_empty())
        .map(|c| format!("{}={}", c.name(), c.value()))
}

pub fn assert_redirect(resp: &Response, location: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some(location)
    );
}
