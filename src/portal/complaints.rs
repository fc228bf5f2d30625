use uuid::Uuid;

use crate::error::Result;
use crate::store::Store;
use crate::types::{Complaint, ComplaintStatus, Timestamp};

use super::required;

/// Files a complaint on behalf of the logged-in student. Always starts `Pending`.
pub fn file(store: &dyn Store, student_email: &str, message: Option<&str>) -> Result<Complaint> {
    let message = required(message, "message")?;

    let complaint = Complaint {
        id: Uuid::new_v4().to_string(),
        student_email: student_email.to_string(),
        message: message.to_string(),
        status: ComplaintStatus::Pending,
        created_at: Timestamp::now(),
    };
    store.create_complaint(&complaint)?;

    tracing::info!("Complaint {} filed by {student_email}", complaint.id);
    Ok(complaint)
}

pub fn list(store: &dyn Store) -> Result<Vec<Complaint>> {
    store.list_complaints()
}

/// Marks a complaint resolved. Idempotent, and a no-op for unknown ids.
pub fn resolve(store: &dyn Store, id: &str) -> Result<()> {
    if store.resolve_complaint(id)? {
        tracing::info!("Resolved complaint {id}");
    } else {
        tracing::debug!("No complaint {id} to resolve");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::SqliteStore;

    fn store() -> SqliteStore {
        let store = SqliteStore::in_memory().unwrap();
        store.initialize().unwrap();
        store
    }

    fn status_of(store: &SqliteStore, id: &str) -> ComplaintStatus {
        list(store)
            .unwrap()
            .into_iter()
            .find(|c| c.id == id)
            .map(|c| c.status)
            .unwrap()
    }

    #[test]
    fn test_resolve_scenario() {
        let store = store();
        let other = file(&store, "b@x.com", Some("Noisy corridor")).unwrap();
        let ac = file(&store, "a@x.com", Some("Broken AC")).unwrap();

        let listed = list(&store).unwrap();
        assert_eq!(listed[0].id, ac.id);
        assert_eq!(listed[0].student_email, "a@x.com");
        assert_eq!(listed[0].status, ComplaintStatus::Pending);

        resolve(&store, &ac.id).unwrap();

        assert_eq!(status_of(&store, &ac.id), ComplaintStatus::Resolved);
        assert_eq!(status_of(&store, &other.id), ComplaintStatus::Pending);
    }

    #[test]
    fn test_resolve_is_monotonic() {
        let store = store();
        let c = file(&store, "a@x.com", Some("Leak")).unwrap();

        resolve(&store, &c.id).unwrap();
        resolve(&store, &c.id).unwrap();

        assert_eq!(status_of(&store, &c.id), ComplaintStatus::Resolved);
    }

    #[test]
    fn test_resolve_unknown_is_noop() {
        let store = store();
        let c = file(&store, "a@x.com", Some("Leak")).unwrap();

        resolve(&store, "missing").unwrap();

        assert_eq!(status_of(&store, &c.id), ComplaintStatus::Pending);
    }

    #[test]
    fn test_file_requires_message() {
        let store = store();
        assert!(matches!(
            file(&store, "a@x.com", Some("")),
            Err(Error::MissingField("message"))
        ));
        assert!(list(&store).unwrap().is_empty());
    }
}
