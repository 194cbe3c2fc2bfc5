//! In-memory blob store.
//!
//! # Responsibility
//! - Provide a non-durable `BlobStore` for tests and embedders that
//!   manage durability themselves.
//!
//! # Invariants
//! - Clones share one underlying map, so a handle kept by a test observes
//!   writes made through the store it handed out.

use super::{BlobStore, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared-handle in-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
