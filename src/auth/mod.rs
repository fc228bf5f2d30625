mod guard;
mod middleware;
mod password;
pub mod session;

pub use guard::{Access, require_role};
pub use middleware::{CurrentSession, GuardError, RequireAdmin, RequireStudent};
pub use password::CredentialHasher;
