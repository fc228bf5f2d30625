use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, Session, SessionManagerLayer};

use crate::error::{Error, Result};
use crate::store::{SessionBackend, Store};
use crate::types::Role;

pub const SESSION_COOKIE: &str = "noticeboard_session";

/// Session key under which the signed-in caller is kept.
const USER_KEY: &str = "user";

/// The caller a session is bound to. A session carries exactly one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub role: Role,
    pub email: String,
}

/// Cookie session layer persisting into the portal store.
#[must_use]
pub fn session_layer(store: Arc<dyn Store>, secure: bool) -> SessionManagerLayer<SessionBackend> {
    SessionManagerLayer::new(SessionBackend::new(store))
        .with_name(SESSION_COOKIE)
        .with_path("/")
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(secure)
}

/// Absolute expiry for a session opened at `now`.
///
/// Fails with `Config` when `ttl` is not positive or lands outside the
/// representable calendar.
pub fn expires_at(now: DateTime<Utc>, ttl: Duration) -> Result<OffsetDateTime> {
    if ttl <= Duration::zero() {
        return Err(Error::Config("session TTL must be positive".to_string()));
    }

    let out_of_range =
        || Error::Config(format!("session TTL of {} hours is out of range", ttl.num_hours()));

    let at = now.checked_add_signed(ttl).ok_or_else(out_of_range)?;
    OffsetDateTime::from_unix_timestamp(at.timestamp()).map_err(|_| out_of_range())
}

/// Binds the session to `user` under a fresh id.
///
/// The previous id is dropped from the store, so whatever the client held
/// before stops resolving. Nothing changes if the expiry cannot be computed.
pub async fn sign_in(session: &Session, user: SessionUser, ttl: Duration) -> Result<()> {
    let expiry = expires_at(Utc::now(), ttl)?;

    session.cycle_id().await?;
    session.insert(USER_KEY, user).await?;
    session.set_expiry(Some(Expiry::AtDateTime(expiry)));
    Ok(())
}

/// The signed-in caller, if any. Undecodable session data reads as anonymous.
pub async fn current_user(session: &Session) -> Result<Option<SessionUser>> {
    match session.get::<SessionUser>(USER_KEY).await {
        Ok(user) => Ok(user),
        Err(tower_sessions::session::Error::SerdeJson(e)) => {
            tracing::warn!("Ignoring undecodable session user: {e}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes the session and clears its cookie. Returns who was signed in.
pub async fn sign_out(session: &Session) -> Result<Option<SessionUser>> {
    let user = current_user(session).await?;
    session.flush().await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    fn backend() -> Arc<SessionBackend> {
        let store = SqliteStore::in_memory().unwrap();
        store.initialize().unwrap();
        Arc::new(SessionBackend::new(Arc::new(store)))
    }

    fn student() -> SessionUser {
        SessionUser {
            role: Role::Student,
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_expires_at_adds_ttl() {
        let now = Utc::now();
        let expiry = expires_at(now, Duration::hours(24)).unwrap();
        assert_eq!(expiry.unix_timestamp(), (now + Duration::hours(24)).timestamp());
    }

    #[test]
    fn test_expires_at_rejects_non_positive_ttl() {
        let now = Utc::now();
        assert!(matches!(expires_at(now, Duration::zero()), Err(Error::Config(_))));
        assert!(matches!(expires_at(now, Duration::hours(-1)), Err(Error::Config(_))));
    }

    #[test]
    fn test_expires_at_rejects_oversized_ttl() {
        let result = expires_at(Utc::now(), Duration::hours(3_000_000_000));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_sign_in_persists_user() {
        let backend = backend();
        let session = Session::new(None, backend.clone(), None);

        sign_in(&session, student(), Duration::hours(1)).await.unwrap();
        session.save().await.unwrap();

        let reloaded = Session::new(session.id(), backend, None);
        assert_eq!(current_user(&reloaded).await.unwrap(), Some(student()));
    }

    #[tokio::test]
    async fn test_oversized_ttl_leaves_session_anonymous() {
        let session = Session::new(None, backend(), None);

        let result = sign_in(&session, student(), Duration::hours(3_000_000_000)).await;
        assert!(matches!(result, Err(Error::Config(_))));
        assert_eq!(current_user(&session).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_in_again_drops_previous_id() {
        let backend = backend();
        let session = Session::new(None, backend.clone(), None);

        sign_in(&session, student(), Duration::hours(1)).await.unwrap();
        session.save().await.unwrap();
        let first_id = session.id();

        let admin = SessionUser {
            role: Role::Admin,
            email: "admin@x.com".to_string(),
        };
        sign_in(&session, admin.clone(), Duration::hours(1)).await.unwrap();
        session.save().await.unwrap();
        assert_ne!(session.id(), first_id);

        let stale = Session::new(first_id, backend.clone(), None);
        assert_eq!(current_user(&stale).await.unwrap(), None);

        let current = Session::new(session.id(), backend, None);
        assert_eq!(current_user(&current).await.unwrap(), Some(admin));
    }

    #[tokio::test]
    async fn test_sign_out() {
        let backend = backend();
        let session = Session::new(None, backend.clone(), None);
        sign_in(&session, student(), Duration::hours(1)).await.unwrap();
        session.save().await.unwrap();
        let id = session.id();

        let reloaded = Session::new(id, backend.clone(), None);
        assert_eq!(sign_out(&reloaded).await.unwrap(), Some(student()));

        let after = Session::new(id, backend, None);
        assert_eq!(current_user(&after).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_record_reads_as_missing() {
        let store = SqliteStore::in_memory().unwrap();
        store.initialize().unwrap();
        let store: Arc<dyn Store> = Arc::new(store);
        let backend = Arc::new(SessionBackend::new(store.clone()));

        let session = Session::new(None, backend.clone(), None);
        sign_in(&session, student(), Duration::hours(1)).await.unwrap();
        session.save().await.unwrap();
        let id = session.id().unwrap();

        // Push the stored expiry into the past
        let mut record = store.get_session(&id.to_string()).unwrap().unwrap();
        record.expires_at = Utc::now() - Duration::minutes(1);
        store.save_session(&record).unwrap();

        let reloaded = Session::new(Some(id), backend, None);
        assert_eq!(current_user(&reloaded).await.unwrap(), None);
        assert!(store.get_session(&id.to_string()).unwrap().is_none());
    }
}
