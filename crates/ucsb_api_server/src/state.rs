//! Shared request state: one SQLite connection and the credential table.

use crate::error::ApiError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use ucsb_api_core::{CredentialStore, CrudService, ServiceResult, SqlRecord, SqliteRecordRepository};

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
    credentials: Arc<CredentialStore>,
}

impl AppState {
    /// Wraps a migrated connection and a loaded credential table.
    pub fn new(conn: Connection, credentials: CredentialStore) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            credentials: Arc::new(credentials),
        }
    }

    pub fn credentials(&self) -> Arc<CredentialStore> {
        Arc::clone(&self.credentials)
    }

    /// Runs one service operation on the blocking pool.
    ///
    /// The connection lock is held for the whole operation, so an update's
    /// load/overwrite/store sequence is not interleaved with other calls.
    pub async fn with_service<E, T, F>(&self, op: F) -> Result<T, ApiError>
    where
        E: SqlRecord,
        T: Send + 'static,
        F: FnOnce(&CrudService<E, SqliteRecordRepository<'_, E>>) -> ServiceResult<T>
            + Send
            + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let conn = db
                .lock()
                .map_err(|_| ApiError::Internal("database lock poisoned".to_string()))?;
            let service = CrudService::new(SqliteRecordRepository::<E>::new(&conn));
            op(&service).map_err(ApiError::from)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("blocking task failed: {err}")))?
    }
}
