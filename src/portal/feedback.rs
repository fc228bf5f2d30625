use uuid::Uuid;

use crate::error::Result;
use crate::store::Store;
use crate::types::{Feedback, Timestamp};

use super::required;

pub fn submit(store: &dyn Store, student_email: &str, message: Option<&str>) -> Result<Feedback> {
    let message = required(message, "message")?;

    let feedback = Feedback {
        id: Uuid::new_v4().to_string(),
        student_email: student_email.to_string(),
        message: message.to_string(),
        created_at: Timestamp::now(),
    };
    store.create_feedback(&feedback)?;

    tracing::info!("Feedback {} submitted by {student_email}", feedback.id);
    Ok(feedback)
}

pub fn list(store: &dyn Store) -> Result<Vec<Feedback>> {
    store.list_feedback()
}
