//! List/get/create/update/delete for any record type.
//!
//! # Invariants
//! - get/update/delete check existence first and report a miss as
//!   `ServiceError::NotFound` (or `RecordNotFound` for record-style deletes).
//! - update overwrites every mutable field and keeps the addressed key.
//! - create never reuses a store-generated key from its input.

use crate::model::{not_found_message, DeleteMessageStyle, Record};
use crate::repo::{RecordRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for record use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Lookup by key found nothing: `"<entity> with id <key> not found"`.
    NotFound { entity: &'static str, key: String },
    /// Delete miss for record-style entities: `"record <key> not found"`.
    RecordNotFound { key: String },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, key } => write!(f, "{}", not_found_message(entity, key)),
            Self::RecordNotFound { key } => write!(f, "record {key} not found"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, key } => Self::NotFound { entity, key },
            other => Self::Repo(other),
        }
    }
}

/// Record service facade over a repository implementation.
pub struct CrudService<E, R> {
    repo: R,
    _record: PhantomData<fn() -> E>,
}

impl<E: Record, R: RecordRepository<E>> CrudService<E, R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }

    /// Returns every stored record in store order.
    pub fn list(&self) -> ServiceResult<Vec<E>> {
        Ok(self.repo.find_all()?)
    }

    /// Persists a new record and returns it with its assigned key.
    ///
    /// Not idempotent: each call with a generated-key record inserts a row.
    pub fn create(&self, mut record: E) -> ServiceResult<E> {
        record.clear_generated_key();
        Ok(self.repo.save(&record)?)
    }

    pub fn get(&self, key: &E::Key) -> ServiceResult<E> {
        self.repo
            .find_by_id(key)?
            .ok_or_else(|| not_found::<E>(key))
    }

    /// Overwrites the record at `key` with every mutable field of `incoming`.
    pub fn update(&self, key: &E::Key, incoming: E) -> ServiceResult<E> {
        let mut stored = self.get(key)?;
        stored.overwrite_from(incoming);
        Ok(self.repo.save(&stored)?)
    }

    /// Deletes the record at `key` and returns the confirmation message.
    pub fn delete(&self, key: &E::Key) -> ServiceResult<String> {
        let style = E::DELETE_MESSAGE_STYLE;
        let missing = || match style {
            DeleteMessageStyle::EntityWithId => not_found::<E>(key),
            DeleteMessageStyle::Record => ServiceError::RecordNotFound {
                key: key.to_string(),
            },
        };

        if self.repo.find_by_id(key)?.is_none() {
            return Err(missing());
        }

        match self.repo.delete(key) {
            Ok(()) => Ok(style.deleted_message(E::ENTITY_NAME, key)),
            // Removed concurrently between lookup and delete.
            Err(RepoError::NotFound { .. }) => Err(missing()),
            Err(other) => Err(other.into()),
        }
    }
}

fn not_found<E: Record>(key: &E::Key) -> ServiceError {
    ServiceError::NotFound {
        entity: E::ENTITY_NAME,
        key: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{CrudService, ServiceError};
    use crate::model::dining_commons_menu_item::UcsbDiningCommonsMenuItem;
    use crate::model::RecordId;
    use crate::repo::{RecordRepository, RepoError, RepoResult};
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;

    /// In-memory repository that counts calls.
    #[derive(Default)]
    struct MemoryRepo {
        rows: RefCell<BTreeMap<RecordId, UcsbDiningCommonsMenuItem>>,
        next_id: Cell<RecordId>,
        saves: Cell<usize>,
    }

    impl RecordRepository<UcsbDiningCommonsMenuItem> for &MemoryRepo {
        fn find_all(&self) -> RepoResult<Vec<UcsbDiningCommonsMenuItem>> {
            Ok(self.rows.borrow().values().cloned().collect())
        }

        fn find_by_id(&self, key: &RecordId) -> RepoResult<Option<UcsbDiningCommonsMenuItem>> {
            Ok(self.rows.borrow().get(key).cloned())
        }

        fn save(&self, record: &UcsbDiningCommonsMenuItem) -> RepoResult<UcsbDiningCommonsMenuItem> {
            self.saves.set(self.saves.get() + 1);
            let mut saved = record.clone();
            let id = match saved.id {
                Some(id) => id,
                None => {
                    self.next_id.set(self.next_id.get() + 1);
                    self.next_id.get()
                }
            };
            saved.id = Some(id);
            self.rows.borrow_mut().insert(id, saved.clone());
            Ok(saved)
        }

        fn delete(&self, key: &RecordId) -> RepoResult<()> {
            self.rows
                .borrow_mut()
                .remove(key)
                .map(|_| ())
                .ok_or(RepoError::NotFound {
                    entity: "UCSBDiningCommonsMenuItem",
                    key: key.to_string(),
                })
        }
    }

    fn item(name: &str) -> UcsbDiningCommonsMenuItem {
        UcsbDiningCommonsMenuItem {
            id: None,
            dining_commons_code: "ortega".to_string(),
            name: name.to_string(),
            station: "grill".to_string(),
        }
    }

    #[test]
    fn create_ignores_caller_supplied_generated_id() {
        let repo = MemoryRepo::default();
        let service = CrudService::new(&repo);

        let mut input = item("burger");
        input.id = Some(42);
        let created = service.create(input).expect("create");

        assert_eq!(created.id, Some(1));
        assert_eq!(repo.saves.get(), 1);
    }

    #[test]
    fn update_missing_record_does_not_save() {
        let repo = MemoryRepo::default();
        let service = CrudService::new(&repo);

        let err = service.update(&5, item("tacos")).expect_err("missing");

        assert!(matches!(err, ServiceError::NotFound { entity, ref key }
            if entity == "UCSBDiningCommonsMenuItem" && key == "5"));
        assert_eq!(err.to_string(), "UCSBDiningCommonsMenuItem with id 5 not found");
        assert_eq!(repo.saves.get(), 0);
    }

    #[test]
    fn delete_returns_confirmation_and_removes_row() {
        let repo = MemoryRepo::default();
        let service = CrudService::new(&repo);
        let created = service.create(item("salad")).expect("create");
        let id = created.id.expect("assigned id");

        let message = service.delete(&id).expect("delete");

        assert_eq!(message, format!("UCSBDiningCommonsMenuItem with id {id} deleted"));
        assert!(service.list().expect("list").is_empty());
    }
}
