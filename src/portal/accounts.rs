use crate::auth::CredentialHasher;
use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{AdminAccount, Role, StudentAccount, Timestamp};

use super::required;

/// Registers an account in the collection selected by `role`.
///
/// Students need a name; admins have none and any given name is ignored.
pub fn register(
    store: &dyn Store,
    hasher: &CredentialHasher,
    role: Role,
    email: Option<&str>,
    name: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let name = match role {
        Role::Student => required(name, "name")?,
        Role::Admin => "",
    };
    let email = required(email, "email")?;
    let password = required(password, "password")?;

    if exists(store, role, email)? {
        return Err(Error::DuplicateEmail);
    }

    let password_hash = hasher.hash(password)?;
    let created_at = Timestamp::now();

    match role {
        Role::Student => store.create_student(&StudentAccount {
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
            created_at,
        })?,
        Role::Admin => store.create_admin(&AdminAccount {
            email: email.to_string(),
            password_hash,
            created_at,
        })?,
    }

    tracing::info!("Registered {role} account {email}");
    Ok(())
}

/// Checks credentials against the collection selected by `role`.
///
/// An unknown email and a wrong password both yield `AuthRejected`.
pub fn authenticate(
    store: &dyn Store,
    hasher: &CredentialHasher,
    role: Role,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let email = required(email, "email")?;
    let password = required(password, "password")?;

    let stored_hash = match role {
        Role::Student => store.get_student(email)?.map(|s| s.password_hash),
        Role::Admin => store.get_admin(email)?.map(|a| a.password_hash),
    };

    let Some(stored_hash) = stored_hash else {
        tracing::warn!("Rejected {role} login");
        return Err(Error::AuthRejected);
    };

    if !hasher.verify(password, &stored_hash)? {
        tracing::warn!("Rejected {role} login");
        return Err(Error::AuthRejected);
    }

    Ok(())
}

fn exists(store: &dyn Store, role: Role, email: &str) -> Result<bool> {
    Ok(match role {
        Role::Student => store.get_student(email)?.is_some(),
        Role::Admin => store.get_admin(email)?.is_some(),
    })
}
