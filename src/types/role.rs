use std::fmt;

use serde::{Deserialize, Serialize};

/// An authenticated role. Anonymous callers have no role at all.
///
/// A role also selects which credential collection an account lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }

    /// Path of the login form for this role. Denied requests land here.
    #[must_use]
    pub const fn login_path(self) -> &'static str {
        match self {
            Self::Student => "/student_login",
            Self::Admin => "/admin_login",
        }
    }

    /// Path a freshly logged-in caller is sent to.
    #[must_use]
    pub const fn dashboard_path(self) -> &'static str {
        match self {
            Self::Student => "/student_dashboard",
            Self::Admin => "/admin_dashboard",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "student" => Some(Self::Student),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint lifecycle. The only transition is `Pending -> Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Resolved,
}

impl ComplaintStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
        }
    }

    pub fn parse(s: &str) -> Option<ComplaintStatus> {
        match s {
            "Pending" => Some(Self::Pending),
            "Resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
