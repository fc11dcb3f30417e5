use std::error::Error;
use std::fmt;
use std::path::Path;

use rusqlite::Connection;
use serde_json::Value;
use tracing::{debug, warn};

use crate::db;
use crate::domain::project::Project;
use crate::seed::default_projects;

pub const DEFAULT_STORAGE_KEY: &str = "projects.v1";

/// A string-keyed slot store, the shape of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    pub fn open(path: &str) -> Result<Self, StoreError> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = db::open_connection(path)?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: db::open_in_memory()?,
        })
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(db::get_slot(&self.conn, key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(db::set_slot(&self.conn, key, value)?)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Ok(db::remove_slot(&self.conn, key)?)
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    slots: std::cell::RefCell<std::collections::HashMap<String, String>>,
    pub fail_reads: bool,
}

#[cfg(test)]
impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Io(std::io::Error::other("storage unavailable")));
        }
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// Persists the whole collection as one JSON array under a single key.
pub struct ProjectStore<S> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> ProjectStore<S> {
    pub fn new(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored collection, reporting why it is unusable.
    pub fn read(&self) -> Result<Vec<Project>, ReadError> {
        let raw = self.kv.get(&self.key)?.ok_or(ReadError::Missing)?;
        if raw.is_empty() {
            return Err(ReadError::Missing);
        }
        let value: Value = serde_json::from_str(&raw).map_err(ReadError::Json)?;
        if !value.is_array() {
            return Err(ReadError::NotASequence);
        }
        serde_json::from_value(value).map_err(ReadError::InvalidRecord)
    }

    /// Never fails: any read problem yields the default collection.
    pub fn load(&self) -> Vec<Project> {
        match self.read() {
            Ok(projects) => {
                debug!(key = %self.key, count = projects.len(), "loaded projects");
                projects
            }
            Err(ReadError::Missing) => {
                debug!(key = %self.key, "no stored projects, using defaults");
                default_projects()
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "stored projects unusable, using defaults");
                default_projects()
            }
        }
    }

    pub fn save(&self, projects: &[Project]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(projects)?;
        self.kv.set(&self.key, &raw)?;
        debug!(key = %self.key, count = projects.len(), bytes = raw.len(), "saved projects");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.kv.remove(&self.key)
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Db(rusqlite::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "storage I/O error: {}", err),
            StoreError::Db(err) => write!(f, "storage database error: {}", err),
            StoreError::Json(err) => write!(f, "JSON encode error: {}", err),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Db(err) => Some(err),
            StoreError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        StoreError::Io(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        StoreError::Db(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Json(value)
    }
}

#[derive(Debug)]
pub enum ReadError {
    Missing,
    Storage(StoreError),
    Json(serde_json::Error),
    NotASequence,
    InvalidRecord(serde_json::Error),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Missing => write!(f, "no stored collection"),
            ReadError::Storage(err) => write!(f, "{}", err),
            ReadError::Json(err) => write!(f, "stored collection is not valid JSON: {}", err),
            ReadError::NotASequence => write!(f, "stored collection is not a JSON array"),
            ReadError::InvalidRecord(err) => {
                write!(f, "stored collection has an invalid record: {}", err)
            }
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadError::Storage(err) => Some(err),
            ReadError::Json(err) | ReadError::InvalidRecord(err) => Some(err),
            ReadError::Missing | ReadError::NotASequence => None,
        }
    }
}

impl From<StoreError> for ReadError {
    fn from(value: StoreError) -> Self {
        ReadError::Storage(value)
    }
}

#[cfg(test)]
#[path = "store_tests_ext.rs"]
mod tests_ext;
