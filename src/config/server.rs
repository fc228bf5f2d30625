use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::Duration;

pub const DEFAULT_SEED_EMAIL: &str = "admin@gmail.com";
pub const DEFAULT_SEED_PASSWORD: &str = "admin123";
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
/// Upper bound accepted for the session lifetime (100 years).
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365 * 100;

/// Credentials of the administrator seeded on first boot.
#[derive(Debug, Clone)]
pub struct SeedAdmin {
    pub email: String,
    pub password: String,
}

impl Default for SeedAdmin {
    fn default() -> Self {
        Self {
            email: DEFAULT_SEED_EMAIL.to_string(),
            password: DEFAULT_SEED_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub seed_admin: SeedAdmin,
    /// Lifetime of a login session, applied to both the cookie and the stored record.
    pub session_ttl: Duration,
    /// Marks the session cookie `Secure`. Enable when served behind HTTPS.
    pub secure_cookies: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("noticeboard.db")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            seed_admin: SeedAdmin::default(),
            session_ttl: Duration::hours(DEFAULT_SESSION_TTL_HOURS),
            secure_cookies: false,
        }
    }
}
