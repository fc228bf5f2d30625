use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens a private in-memory database. Used by tests and throwaway servers.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
impl SqliteStore {
    pub(crate) fn count_admins(&self) -> i64 {
        self.conn()
            .query_row("SELECT COUNT(*) FROM admins", [], |row| row.get(0))
            .unwrap()
    }

    pub(crate) fn complaint_status(&self, id: &str) -> Option<ComplaintStatus> {
        self.list_complaints()
            .unwrap()
            .into_iter()
            .find(|c| c.id == id)
            .map(|c| c.status)
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    Timestamp::from_raw(s).to_datetime().unwrap_or_else(|| {
        tracing::error!("Invalid datetime in database: '{}'", s);
        DateTime::<Utc>::MIN_UTC
    })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    Timestamp::from_datetime(*dt).as_str().to_string()
}

fn map_unique_violation(result: rusqlite::Result<usize>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(Error::DuplicateEmail)
        }
        Err(e) => Err(Error::from(e)),
    }
}

fn complaint_from_row(row: &Row<'_>) -> rusqlite::Result<Complaint> {
    let status: String = row.get(3)?;
    Ok(Complaint {
        id: row.get(0)?,
        student_email: row.get(1)?,
        message: row.get(2)?,
        // Anything that is not a known status is treated as still open
        status: ComplaintStatus::parse(&status).unwrap_or_default(),
        created_at: Timestamp::from_raw(row.get::<_, String>(4)?),
    })
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Credential operations

    fn create_student(&self, student: &StudentAccount) -> Result<()> {
        let result = self.conn().execute(
            "INSERT INTO students (email, name, password_hash, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                student.email,
                student.name,
                student.password_hash,
                student.created_at.as_str(),
            ],
        );
        map_unique_violation(result)
    }

    fn get_student(&self, email: &str) -> Result<Option<StudentAccount>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT email, name, password_hash, created_at FROM students WHERE email = ?1",
            params![email],
            |row| {
                Ok(StudentAccount {
                    email: row.get(0)?,
                    name: row.get(1)?,
                    password_hash: row.get(2)?,
                    created_at: Timestamp::from_raw(row.get::<_, String>(3)?),
                })
            },
        )
        .optional()
        .map_err(Error::from)
    }

    fn create_admin(&self, admin: &AdminAccount) -> Result<()> {
        let result = self.conn().execute(
            "INSERT INTO admins (email, password_hash, created_at) VALUES (?1, ?2, ?3)",
            params![admin.email, admin.password_hash, admin.created_at.as_str()],
        );
        map_unique_violation(result)
    }

    fn get_admin(&self, email: &str) -> Result<Option<AdminAccount>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT email, password_hash, created_at FROM admins WHERE email = ?1",
            params![email],
            |row| {
                Ok(AdminAccount {
                    email: row.get(0)?,
                    password_hash: row.get(1)?,
                    created_at: Timestamp::from_raw(row.get::<_, String>(2)?),
                })
            },
        )
        .optional()
        .map_err(Error::from)
    }

    // Notice operations

    fn create_notice(&self, notice: &Notice) -> Result<()> {
        self.conn().execute(
            "INSERT INTO notices (id, title, message, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                notice.id,
                notice.title,
                notice.message,
                notice.created_at.as_str(),
            ],
        )?;
        Ok(())
    }

    fn list_notices(&self) -> Result<Vec<Notice>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, title, message, created_at FROM notices
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Notice {
                id: row.get(0)?,
                title: row.get(1)?,
                message: row.get(2)?,
                created_at: Timestamp::from_raw(row.get::<_, String>(3)?),
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn delete_notice(&self, id: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM notices WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn delete_all_notices(&self) -> Result<usize> {
        let rows = self.conn().execute("DELETE FROM notices", [])?;
        Ok(rows)
    }

    // Complaint operations

    fn create_complaint(&self, complaint: &Complaint) -> Result<()> {
        self.conn().execute(
            "INSERT INTO complaints (id, student_email, message, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                complaint.id,
                complaint.student_email,
                complaint.message,
                complaint.status.as_str(),
                complaint.created_at.as_str(),
            ],
        )?;
        Ok(())
    }

    fn list_complaints(&self) -> Result<Vec<Complaint>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, student_email, message, status, created_at FROM complaints
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let rows = stmt.query_map([], complaint_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn resolve_complaint(&self, id: &str) -> Result<bool> {
        let rows = self.conn().execute(
            "UPDATE complaints SET status = ?1 WHERE id = ?2",
            params![ComplaintStatus::Resolved.as_str(), id],
        )?;
        Ok(rows > 0)
    }

    // Feedback operations

    fn create_feedback(&self, feedback: &Feedback) -> Result<()> {
        self.conn().execute(
            "INSERT INTO feedbacks (id, student_email, message, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                feedback.id,
                feedback.student_email,
                feedback.message,
                feedback.created_at.as_str(),
            ],
        )?;
        Ok(())
    }

    fn list_feedback(&self) -> Result<Vec<Feedback>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, student_email, message, created_at FROM feedbacks
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Feedback {
                id: row.get(0)?,
                student_email: row.get(1)?,
                message: row.get(2)?,
                created_at: Timestamp::from_raw(row.get::<_, String>(3)?),
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    // Session operations

    fn save_session(&self, session: &SessionRecord) -> Result<()> {
        self.conn().execute(
            "INSERT INTO sessions (id, data, expires_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET data = excluded.data, expires_at = excluded.expires_at",
            params![session.id, session.data, format_datetime(&session.expires_at)],
        )?;
        Ok(())
    }

    fn get_session(&self, id: &str) -> Result<Option<SessionRecord>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, data, expires_at FROM sessions WHERE id = ?1",
            params![id],
            |row| {
                Ok(SessionRecord {
                    id: row.get(0)?,
                    data: row.get(1)?,
                    expires_at: parse_datetime(&row.get::<_, String>(2)?),
                })
            },
        )
        .optional()
        .map_err(Error::from)
    }

    fn delete_session(&self, id: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM sessions WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn delete_expired_sessions(&self, now: &DateTime<Utc>) -> Result<usize> {
        let rows = self.conn().execute(
            "DELETE FROM sessions WHERE expires_at <= ?1",
            params![format_datetime(now)],
        )?;
        Ok(rows)
    }
}
