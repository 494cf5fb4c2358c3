//! Access policy: roles, capabilities and bearer-token principals.
//!
//! # Invariants
//! - Access is denied by default: no principal, no capability.
//! - `ADMIN` always implies `USER`-level read access.

pub mod capability;
pub mod credentials;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use capability::{parse_role, Capability, Role, RoleError};
pub use credentials::{CredentialError, CredentialStore, Principal};

/// Reason a call was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    Unauthenticated,
    MissingCapability {
        email: String,
        capability: Capability,
    },
}

impl Display for AccessDenied {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "caller is not authenticated"),
            Self::MissingCapability { email, capability } => write!(
                f,
                "caller `{email}` lacks capability `{}`",
                capability.as_str()
            ),
        }
    }
}

impl Error for AccessDenied {}

/// Checks that `principal` may exercise `capability`.
pub fn authorize(principal: Option<&Principal>, capability: Capability) -> Result<(), AccessDenied> {
    let Some(principal) = principal else {
        return Err(AccessDenied::Unauthenticated);
    };

    if principal.has_capability(capability) {
        return Ok(());
    }

    Err(AccessDenied::MissingCapability {
        email: principal.email.clone(),
        capability,
    })
}
