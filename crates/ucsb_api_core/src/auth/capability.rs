//! Role and capability declarations for the route guards.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Operation class a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Read,
    Write,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// Authorization label attached to a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// Credential-file spelling for the user role.
pub const ROLE_USER: &str = "USER";
/// Credential-file spelling for the admin role.
pub const ROLE_ADMIN: &str = "ADMIN";

impl Role {
    /// Stable string id used in credential files and API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => ROLE_USER,
            Self::Admin => ROLE_ADMIN,
        }
    }

    /// Capabilities this role grants on its own.
    pub fn grants(self) -> &'static [Capability] {
        match self {
            Self::User => &[Capability::Read],
            Self::Admin => &[Capability::Read, Capability::Write],
        }
    }
}

/// Parses a role name; accepts the Spring-style `ROLE_` prefix.
pub fn parse_role(value: &str) -> Result<Role, RoleError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(RoleError::EmptyRole);
    }

    match normalized.strip_prefix("ROLE_").unwrap_or(normalized) {
        ROLE_USER => Ok(Role::User),
        ROLE_ADMIN => Ok(Role::Admin),
        _ => Err(RoleError::UnsupportedRole(normalized.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    EmptyRole,
    UnsupportedRole(String),
}

impl Display for RoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRole => write!(f, "role value must not be empty"),
            Self::UnsupportedRole(value) => write!(f, "role is unsupported: {value}"),
        }
    }
}

impl Error for RoleError {}
