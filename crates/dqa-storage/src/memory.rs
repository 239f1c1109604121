use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StorageError;
use crate::store::{BoxFuture, TableStore};

/// Process-local store. Used for development and as the test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Vec<String>>>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table with raw values (header included).
    pub fn with_table(self, table: &str, values: Vec<Vec<String>>) -> Self {
        self.lock().insert(table.to_string(), values);
        self
    }

    /// Make every subsequent call fail, as a dropped connection would.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Copy of a table's current contents.
    pub fn snapshot(&self, table: &str) -> Vec<Vec<String>> {
        self.lock().get(table).cloned().unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Vec<String>>>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

impl TableStore for MemoryStore {
    fn backend(&self) -> &str {
        "memory"
    }

    fn get_all_values<'a>(
        &'a self,
        table: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Vec<String>>, StorageError>> {
        Box::pin(async move {
            self.check_available()?;
            Ok(self.snapshot(table))
        })
    }

    fn append_rows<'a>(
        &'a self,
        table: &'a str,
        rows: Vec<Vec<String>>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.check_available()?;
            self.lock().entry(table.to_string()).or_default().extend(rows);
            Ok(())
        })
    }
}
