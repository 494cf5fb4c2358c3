//! Core domain logic for the UCSB records API.
//! This crate owns the record model, persistence, and access policy; the
//! server crate only adapts it to HTTP.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use auth::{authorize, AccessDenied, Capability, CredentialError, CredentialStore, Principal, Role};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::Article;
pub use model::dining_commons_menu_item::UcsbDiningCommonsMenuItem;
pub use model::menu_item_review::MenuItemReview;
pub use model::organization::UcsbOrganization;
pub use model::recommendation_request::RecommendationRequest;
pub use model::{DeleteMessageStyle, KeyStrategy, Record, RecordId};
pub use repo::{RecordRepository, RepoError, RepoResult, SqlRecord, SqliteRecordRepository};
pub use service::crud_service::{CrudService, ServiceError, ServiceResult};

/// Service name reported by the system info endpoint.
pub fn service_name() -> &'static str {
    "ucsb-api"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
