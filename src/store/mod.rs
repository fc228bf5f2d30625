mod schema;
mod session;
mod sqlite;

pub use session::SessionBackend;
pub use sqlite::SqliteStore;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::*;

/// Store defines the document store interface.
///
/// Every method touches a single collection and at most one record, except the
/// bulk deletes. List methods return newest first.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Credential operations. Creating an existing email fails with `DuplicateEmail`.
    fn create_student(&self, student: &StudentAccount) -> Result<()>;
    fn get_student(&self, email: &str) -> Result<Option<StudentAccount>>;
    fn create_admin(&self, admin: &AdminAccount) -> Result<()>;
    fn get_admin(&self, email: &str) -> Result<Option<AdminAccount>>;

    // Notice operations
    fn create_notice(&self, notice: &Notice) -> Result<()>;
    fn list_notices(&self) -> Result<Vec<Notice>>;
    fn delete_notice(&self, id: &str) -> Result<bool>;
    fn delete_all_notices(&self) -> Result<usize>;

    // Complaint operations. There is deliberately no way to set an arbitrary status.
    fn create_complaint(&self, complaint: &Complaint) -> Result<()>;
    fn list_complaints(&self) -> Result<Vec<Complaint>>;
    fn resolve_complaint(&self, id: &str) -> Result<bool>;

    // Feedback operations
    fn create_feedback(&self, feedback: &Feedback) -> Result<()>;
    fn list_feedback(&self) -> Result<Vec<Feedback>>;

    // Session operations
    fn save_session(&self, session: &SessionRecord) -> Result<()>;
    fn get_session(&self, id: &str) -> Result<Option<SessionRecord>>;
    fn delete_session(&self, id: &str) -> Result<bool>;
    fn delete_expired_sessions(&self, now: &DateTime<Utc>) -> Result<usize>;
}
