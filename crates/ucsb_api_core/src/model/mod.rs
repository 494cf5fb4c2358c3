//! Domain records served by the API.
//!
//! # Responsibility
//! - Define the plain record types for every UCSB entity.
//! - Describe each record to the generic repository/service layers through
//!   the [`Record`] trait.
//!
//! # Invariants
//! - A record is identified by exactly one key: a store-generated surrogate
//!   id or a caller-supplied natural key, never both.
//! - Updates overwrite every mutable field; the key is never taken from the
//!   incoming record.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::str::FromStr;

pub mod article;
pub mod dining_commons_menu_item;
pub mod menu_item_review;
pub mod organization;
pub mod recommendation_request;
pub mod timestamp;

/// Surrogate identifier assigned by the store on first insert.
pub type RecordId = i64;

/// Where a record's identifier comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStrategy {
    /// Store assigns the key on insert.
    Generated,
    /// Caller supplies the key at creation; it never changes afterwards.
    Natural,
}

/// Wording used by the delete operation for confirmations and misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMessageStyle {
    /// `"<Entity> with id <key> deleted"`.
    EntityWithId,
    /// `"record <key> deleted"`, kept for menu item reviews.
    Record,
}

impl DeleteMessageStyle {
    pub fn deleted_message(self, entity: &str, key: impl Display) -> String {
        match self {
            Self::EntityWithId => format!("{entity} with id {key} deleted"),
            Self::Record => format!("record {key} deleted"),
        }
    }

    pub fn not_found_message(self, entity: &str, key: impl Display) -> String {
        match self {
            Self::EntityWithId => not_found_message(entity, key),
            Self::Record => format!("record {key} not found"),
        }
    }
}

/// Standard lookup-miss message shared by get/update/delete.
pub fn not_found_message(entity: &str, key: impl Display) -> String {
    format!("{entity} with id {key} not found")
}

/// Storage-agnostic description of one entity type.
pub trait Record: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + 'static {
    /// Identifier type, parsed from the key query parameter.
    type Key: Clone + Debug + Display + FromStr + Send + Sync + 'static;

    /// Name used in user-facing messages, e.g. `RecommendationRequest`.
    const ENTITY_NAME: &'static str;
    /// Query parameter carrying the key on get/update/delete.
    const KEY_PARAM: &'static str = "id";
    const KEY_STRATEGY: KeyStrategy;
    const DELETE_MESSAGE_STYLE: DeleteMessageStyle = DeleteMessageStyle::EntityWithId;

    /// Returns the key, or `None` for a generated-key record not yet stored.
    fn key(&self) -> Option<Self::Key>;

    /// Drops a store-generated key so the record is inserted as new.
    ///
    /// Natural keys are left untouched.
    fn clear_generated_key(&mut self);

    /// Copies every mutable field from `incoming`, keeping this record's key.
    fn overwrite_from(&mut self, incoming: Self);
}
