//! In-memory snapshot storage for native hosts and tests.
use crate::SnapshotStorage;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryStorageError {
    #[error("read of {0} refused")]
    ReadRefused(String),
    #[error("write of {0} refused")]
    WriteRefused(String),
}

/// Key-value snapshot storage held in memory.
///
/// Clones share the same entries, so a second store built from a clone sees
/// what the first one wrote (a simulated page reload).
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshots {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: Rc<Cell<bool>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemorySnapshots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw value under `key`.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Remove an entry, as a user wiping site data would.
    pub fn wipe(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl SnapshotStorage for MemorySnapshots {
    type Error = MemoryStorageError;

    fn read_snapshot(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.fail_reads.get() {
            return Err(MemoryStorageError::ReadRefused(key.to_string()));
        }
        Ok(self.get(key))
    }

    fn write_snapshot(&self, key: &str, snapshot: &str) -> Result<(), Self::Error> {
        if self.fail_writes.get() {
            return Err(MemoryStorageError::WriteRefused(key.to_string()));
        }
        self.insert(key, snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let a = MemorySnapshots::new();
        let b = a.clone();
        a.write_snapshot("k", "v").unwrap();
        assert_eq!(b.read_snapshot("k").unwrap().as_deref(), Some("v"));
        b.wipe("k");
        assert_eq!(a.get("k"), None);
    }

    #[test]
    fn injected_failures_surface_as_errors() {
        let storage = MemorySnapshots::with_entry("k", "v");
        storage.set_fail_reads(true);
        assert_eq!(
            storage.read_snapshot("k"),
            Err(MemoryStorageError::ReadRefused("k".into()))
        );
        storage.set_fail_writes(true);
        assert!(storage.write_snapshot("k", "w").is_err());
        assert_eq!(storage.get("k").as_deref(), Some("v"));
    }
}
