//! Generic key-based repository over one SQLite table per record type.
//!
//! # Invariants
//! - `save` inserts unseen keys and overwrites existing ones.
//! - Generated keys are assigned by SQLite and written back into the
//!   returned record.
//! - A natural-key record must always carry its key.

use crate::db::DbError;
use crate::model::timestamp::TIMESTAMP_FORMAT;
use crate::model::{KeyStrategy, Record, RecordId};
use chrono::NaiveDateTime;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { entity: &'static str, key: String },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, key } => write!(f, "{entity} not found: {key}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-based access to one record type.
pub trait RecordRepository<E: Record> {
    fn find_all(&self) -> RepoResult<Vec<E>>;
    fn find_by_id(&self, key: &E::Key) -> RepoResult<Option<E>>;
    /// Inserts or overwrites, returning the record as persisted.
    fn save(&self, record: &E) -> RepoResult<E>;
    fn delete(&self, key: &E::Key) -> RepoResult<()>;
}

/// Table mapping for a record stored in SQLite.
pub trait SqlRecord: Record {
    const TABLE: &'static str;
    const KEY_COLUMN: &'static str;
    /// Non-key columns, in the order produced by `field_values`.
    const FIELD_COLUMNS: &'static [&'static str];

    fn key_value(key: &Self::Key) -> Value;
    fn field_values(&self) -> Vec<Value>;
    /// Builds a record from a row selected with key + field columns.
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
    fn with_generated_key(self, id: RecordId) -> Self;
}

/// SQLite-backed repository for any [`SqlRecord`].
pub struct SqliteRecordRepository<'conn, E> {
    conn: &'conn Connection,
    _record: PhantomData<fn() -> E>,
}

impl<'conn, E: SqlRecord> SqliteRecordRepository<'conn, E> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!(
            "SELECT {}, {} FROM {}",
            E::KEY_COLUMN,
            E::FIELD_COLUMNS.join(", "),
            E::TABLE
        )
    }

    fn insert_generated(&self, record: &E) -> RepoResult<E> {
        let placeholders = vec!["?"; E::FIELD_COLUMNS.len()].join(", ");
        self.conn.execute(
            &format!(
                "INSERT INTO {} ({}) VALUES ({placeholders});",
                E::TABLE,
                E::FIELD_COLUMNS.join(", ")
            ),
            params_from_iter(record.field_values()),
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(record.clone().with_generated_key(id))
    }

    fn upsert(&self, key: &E::Key, record: &E) -> RepoResult<E> {
        let placeholders = vec!["?"; E::FIELD_COLUMNS.len() + 1].join(", ");
        let assignments = E::FIELD_COLUMNS
            .iter()
            .map(|column| format!("{column} = excluded.{column}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut bind_values = vec![E::key_value(key)];
        bind_values.extend(record.field_values());

        self.conn.execute(
            &format!(
                "INSERT INTO {table} ({key}, {columns}) VALUES ({placeholders})
                 ON CONFLICT({key}) DO UPDATE SET {assignments};",
                table = E::TABLE,
                key = E::KEY_COLUMN,
                columns = E::FIELD_COLUMNS.join(", "),
            ),
            params_from_iter(bind_values),
        )?;

        Ok(record.clone())
    }
}

impl<E: SqlRecord> RecordRepository<E> for SqliteRecordRepository<'_, E> {
    fn find_all(&self) -> RepoResult<Vec<E>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY rowid ASC;", Self::select_sql()))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(E::from_row(row)?);
        }

        Ok(records)
    }

    fn find_by_id(&self, key: &E::Key) -> RepoResult<Option<E>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE {} = ?1;",
            Self::select_sql(),
            E::KEY_COLUMN
        ))?;

        let mut rows = stmt.query([E::key_value(key)])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(E::from_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, record: &E) -> RepoResult<E> {
        match (record.key(), E::KEY_STRATEGY) {
            (Some(key), _) => self.upsert(&key, record),
            (None, KeyStrategy::Generated) => self.insert_generated(record),
            (None, KeyStrategy::Natural) => Err(RepoError::InvalidData(format!(
                "{} requires a caller-supplied {}",
                E::ENTITY_NAME,
                E::KEY_COLUMN
            ))),
        }
    }

    fn delete(&self, key: &E::Key) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!("DELETE FROM {} WHERE {} = ?1;", E::TABLE, E::KEY_COLUMN),
            [E::key_value(key)],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: E::ENTITY_NAME,
                key: key.to_string(),
            });
        }

        Ok(())
    }
}

pub(crate) fn timestamp_value(value: &NaiveDateTime) -> Value {
    Value::Text(value.format(TIMESTAMP_FORMAT).to_string())
}

pub(crate) fn bool_value(value: bool) -> Value {
    Value::Integer(if value { 1 } else { 0 })
}

pub(crate) fn parse_timestamp(row: &Row<'_>, table: &str, column: &str) -> RepoResult<NaiveDateTime> {
    let text: String = row.get(column)?;
    NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!("invalid timestamp `{text}` in {table}.{column}"))
    })
}

pub(crate) fn parse_bool(row: &Row<'_>, table: &str, column: &str) -> RepoResult<bool> {
    match row.get::<_, i64>(column)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean `{other}` in {table}.{column}"
        ))),
    }
}
