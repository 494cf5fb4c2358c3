//! Repository contracts and the SQLite implementation.
//!
//! # Responsibility
//! - Define key-based data access (`find_all`, `find_by_id`, `save`, `delete`).
//! - Keep SQL and column mapping inside the persistence boundary.
//!
//! # Invariants
//! - Repositories return semantic errors (`NotFound`) alongside DB errors.
//! - Persisted rows that cannot be mapped back are reported, never masked.

pub mod mappings;
pub mod record_repo;

pub use record_repo::{
    RecordRepository, RepoError, RepoResult, SqlRecord, SqliteRecordRepository,
};
