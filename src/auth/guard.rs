use super::session::SessionUser;
use crate::types::Role;

/// Outcome of checking a caller against a required role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    /// Carries the login path the caller must be sent to.
    Denied { redirect: &'static str },
}

/// Pure role check over the caller bound to the current session.
///
/// A session holds exactly one role, so an admin session does not satisfy a
/// student route and vice versa.
#[must_use]
pub fn require_role(user: Option<&SessionUser>, role: Role) -> Access {
    match user {
        Some(user) if user.role == role => Access::Allowed,
        _ => Access::Denied {
            redirect: role.login_path(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            role,
            email: "someone@x.com".to_string(),
        }
    }

    #[test]
    fn test_anonymous_is_denied() {
        assert_eq!(
            require_role(None, Role::Student),
            Access::Denied {
                redirect: "/student_login"
            }
        );
        assert_eq!(
            require_role(None, Role::Admin),
            Access::Denied {
                redirect: "/admin_login"
            }
        );
    }

    #[test]
    fn test_matching_role_is_allowed() {
        assert_eq!(require_role(Some(&user(Role::Student)), Role::Student), Access::Allowed);
        assert_eq!(require_role(Some(&user(Role::Admin)), Role::Admin), Access::Allowed);
    }

    #[test]
    fn test_other_role_is_denied() {
        assert_eq!(
            require_role(Some(&user(Role::Student)), Role::Admin),
            Access::Denied {
                redirect: "/admin_login"
            }
        );
        assert_eq!(
            require_role(Some(&user(Role::Admin)), Role::Student),
            Access::Denied {
                redirect: "/student_login"
            }
        );
    }
}
