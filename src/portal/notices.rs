use uuid::Uuid;

use crate::error::Result;
use crate::store::Store;
use crate::types::{Notice, Timestamp};

use super::required;

pub fn publish(store: &dyn Store, title: Option<&str>, message: Option<&str>) -> Result<Notice> {
    let title = required(title, "title")?;
    let message = required(message, "message")?;

    let notice = Notice {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        message: message.to_string(),
        created_at: Timestamp::now(),
    };
    store.create_notice(&notice)?;

    tracing::info!("Published notice {}", notice.id);
    Ok(notice)
}

/// All notices, newest first.
pub fn list(store: &dyn Store) -> Result<Vec<Notice>> {
    store.list_notices()
}

/// Removes one notice. An unknown id is not an error.
pub fn delete(store: &dyn Store, id: &str) -> Result<()> {
    if store.delete_notice(id)? {
        tracing::info!("Deleted notice {id}");
    } else {
        tracing::debug!("No notice {id} to delete");
    }
    Ok(())
}

pub fn delete_all(store: &dyn Store) -> Result<()> {
    let removed = store.delete_all_notices()?;
    tracing::info!("Deleted all notices ({removed})");
    Ok(())
}
