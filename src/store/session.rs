use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use time::OffsetDateTime;
use tower_sessions::SessionStore;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store;

use super::Store;
use crate::types::SessionRecord;

/// Keeps `tower-sessions` records in the `sessions` table of a [`Store`].
///
/// Records are stored as JSON next to their expiry. Expired rows read as
/// missing and are deleted on the way out.
#[derive(Clone)]
pub struct SessionBackend {
    store: Arc<dyn Store>,
}

impl SessionBackend {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl fmt::Debug for SessionBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBackend").finish_non_exhaustive()
    }
}

fn backend_error(e: crate::error::Error) -> session_store::Error {
    session_store::Error::Backend(e.to_string())
}

fn expiry_to_utc(at: OffsetDateTime) -> session_store::Result<DateTime<Utc>> {
    DateTime::from_timestamp(at.unix_timestamp(), at.nanosecond())
        .ok_or_else(|| session_store::Error::Encode(format!("expiry out of range: {at}")))
}

#[async_trait]
impl SessionStore for SessionBackend {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self
            .store
            .get_session(&record.id.to_string())
            .map_err(backend_error)?
            .is_some()
        {
            record.id = Id::default();
        }
        self.save(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let data =
            serde_json::to_string(record).map_err(|e| session_store::Error::Encode(e.to_string()))?;

        self.store
            .save_session(&SessionRecord {
                id: record.id.to_string(),
                data,
                expires_at: expiry_to_utc(record.expiry_date)?,
            })
            .map_err(backend_error)
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let id = session_id.to_string();
        let Some(session) = self.store.get_session(&id).map_err(backend_error)? else {
            return Ok(None);
        };

        if session.is_expired(&Utc::now()) {
            self.store.delete_session(&id).map_err(backend_error)?;
            return Ok(None);
        }

        serde_json::from_str(&session.data)
            .map(Some)
            .map_err(|e| session_store::Error::Decode(e.to_string()))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.store
            .delete_session(&session_id.to_string())
            .map_err(backend_error)?;
        Ok(())
    }
}
