use crate::auth::CredentialHasher;
use crate::config::SeedAdmin;
use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{AdminAccount, Timestamp};

/// Ensures the seed admin exists. Returns `true` when it was created now.
///
/// An existing seed admin is left as is, including its password.
pub fn ensure_seed_admin(store: &dyn Store, hasher: &CredentialHasher, seed: &SeedAdmin) -> Result<bool> {
    if seed.email.is_empty() || seed.password.is_empty() {
        return Err(Error::Config("seed admin email and password must be set".to_string()));
    }

    if store.get_admin(&seed.email)?.is_some() {
        tracing::debug!("Seed admin {} already present", seed.email);
        return Ok(false);
    }

    let admin = AdminAccount {
        email: seed.email.clone(),
        password_hash: hasher.hash(&seed.password)?,
        created_at: Timestamp::now(),
    };

    match store.create_admin(&admin) {
        Ok(()) => {
            tracing::info!("Seeded admin account {}", seed.email);
            Ok(true)
        }
        // Another process seeded it between the check and the insert
        Err(Error::DuplicateEmail) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::accounts::authenticate;
    use crate::store::SqliteStore;
    use crate::types::Role;

    #[test]
    fn test_bootstrap_twice_leaves_one_admin() {
        let store = SqliteStore::in_memory().unwrap();
        store.initialize().unwrap();
        let hasher = CredentialHasher::new();
        let seed = SeedAdmin::default();

        assert!(ensure_seed_admin(&store, &hasher, &seed).unwrap());
        let first_hash = store.get_admin(&seed.email).unwrap().unwrap().password_hash;

        assert!(!ensure_seed_admin(&store, &hasher, &seed).unwrap());
        assert_eq!(store.count_admins(), 1);

        // Not re-hashed on the second run
        let second_hash = store.get_admin(&seed.email).unwrap().unwrap().password_hash;
        assert_eq!(first_hash, second_hash);
    }

    #[test]
    fn test_seed_admin_can_log_in() {
        let store = SqliteStore::in_memory().unwrap();
        store.initialize().unwrap();
        let hasher = CredentialHasher::new();

        ensure_seed_admin(&store, &hasher, &SeedAdmin::default()).unwrap();

        authenticate(&store, &hasher, Role::Admin, Some("admin@gmail.com"), Some("admin123")).unwrap();
    }

    #[test]
    fn test_changed_seed_password_does_not_reset() {
        let store = SqliteStore::in_memory().unwrap();
        store.initialize().unwrap();
        let hasher = CredentialHasher::new();

        ensure_seed_admin(&store, &hasher, &SeedAdmin::default()).unwrap();
        let changed = SeedAdmin {
            password: "different".to_string(),
            ..SeedAdmin::default()
        };
        assert!(!ensure_seed_admin(&store, &hasher, &changed).unwrap());

        authenticate(&store, &hasher, Role::Admin, Some("admin@gmail.com"), Some("admin123")).unwrap();
    }

    #[test]
    fn test_empty_seed_rejected() {
        let store = SqliteStore::in_memory().unwrap();
        store.initialize().unwrap();
        let seed = SeedAdmin {
            email: String::new(),
            password: "pw".to_string(),
        };
        assert!(matches!(
            ensure_seed_admin(&store, &CredentialHasher::new(), &seed),
            Err(Error::Config(_))
        ));
    }
}
