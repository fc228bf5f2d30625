use chrono::{DateTime, Utc};

use super::{ComplaintStatus, Timestamp};

#[derive(Debug, Clone)]
pub struct StudentAccount {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub message: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct Complaint {
    pub id: String,
    /// Email of the filing student. Not checked against the students collection.
    pub student_email: String,
    pub message: String,
    pub status: ComplaintStatus,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct Feedback {
    pub id: String,
    pub student_email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// A persisted browser session. `data` is opaque to the store.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: String,
    pub data: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    #[must_use]
    pub fn is_expired(&self, now: &DateTime<Utc>) -> bool {
        &self.expires_at <= now
    }
}
