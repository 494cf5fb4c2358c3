//! Bearer-token credential table.
//!
//! # Responsibility
//! - Load the token → principal table from a TOML document.
//! - Resolve `Authorization` header values to principals.
//!
//! # Invariants
//! - Every principal holds `USER`; admin emails additionally hold `ADMIN`.
//! - Tokens are unique and non-empty.
//!
//! Document shape:
//!
//! ```toml
//! admin_emails = ["admin@ucsb.edu"]
//!
//! [[users]]
//! token = "admin-token"
//! email = "admin@ucsb.edu"
//!
//! [[users]]
//! token = "student-token"
//! email = "student@ucsb.edu"
//! roles = []
//! ```

use super::capability::{parse_role, Capability, Role, RoleError};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub email: String,
    pub roles: BTreeSet<Role>,
}

impl Principal {
    pub fn new(email: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            email: email.into(),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.roles
            .iter()
            .any(|role| role.grants().contains(&capability))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CredentialFile {
    #[serde(default)]
    admin_emails: Vec<String>,
    #[serde(default)]
    users: Vec<CredentialEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CredentialEntry {
    token: String,
    email: String,
    #[serde(default)]
    roles: Vec<String>,
}

/// Token → principal lookup table.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    principals: HashMap<String, Principal>,
}

impl CredentialStore {
    /// Store with no credentials; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads and parses a credential file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            CredentialError::Io(format!("failed to read `{}`: {err}", path.display()))
        })?;
        let store = Self::from_toml_str(&text)?;
        info!(
            "event=credentials_load module=auth status=ok principals={}",
            store.len()
        );
        Ok(store)
    }

    /// Parses a credential document.
    pub fn from_toml_str(text: &str) -> Result<Self, CredentialError> {
        let file: CredentialFile =
            toml::from_str(text).map_err(|err| CredentialError::Parse(err.to_string()))?;

        let admin_emails: HashSet<String> = file
            .admin_emails
            .iter()
            .map(|email| email.trim().to_ascii_lowercase())
            .collect();

        let mut store = Self::empty();
        for entry in file.users {
            let email = entry.email.trim();
            if email.is_empty() {
                return Err(CredentialError::EmptyEmail);
            }

            let mut roles = BTreeSet::from([Role::User]);
            if admin_emails.contains(&email.to_ascii_lowercase()) {
                roles.insert(Role::Admin);
            }
            for value in &entry.roles {
                roles.insert(parse_role(value).map_err(CredentialError::Role)?);
            }

            store.insert(entry.token, Principal { email: email.to_string(), roles })?;
        }

        Ok(store)
    }

    /// Registers one token.
    pub fn insert(
        &mut self,
        token: impl Into<String>,
        principal: Principal,
    ) -> Result<(), CredentialError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(CredentialError::EmptyToken);
        }
        if self.principals.contains_key(&token) {
            return Err(CredentialError::DuplicateToken(principal.email));
        }
        self.principals.insert(token, principal);
        Ok(())
    }

    pub fn resolve(&self, token: &str) -> Option<&Principal> {
        self.principals.get(token)
    }

    /// Resolves a raw `Authorization` header value (`Bearer <token>`).
    pub fn resolve_authorization(&self, header_value: &str) -> Option<&Principal> {
        let token = header_value.trim().strip_prefix(BEARER_PREFIX)?.trim();
        if token.is_empty() {
            return None;
        }
        self.resolve(token)
    }

    pub fn len(&self) -> usize {
        self.principals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

/// Credential loading errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    Io(String),
    Parse(String),
    EmptyToken,
    EmptyEmail,
    /// Carries the email of the second entry using the token.
    DuplicateToken(String),
    Role(RoleError),
}

impl Display for CredentialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(message) => write!(f, "{message}"),
            Self::Parse(message) => write!(f, "invalid credential file: {message}"),
            Self::EmptyToken => write!(f, "credential token must not be empty"),
            Self::EmptyEmail => write!(f, "credential email must not be empty"),
            Self::DuplicateToken(email) => {
                write!(f, "credential token for `{email}` is already registered")
            }
            Self::Role(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CredentialError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Role(err) => Some(err),
            _ => None,
        }
    }
}
