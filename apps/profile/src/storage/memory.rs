use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::KeyValueStore;
use crate::errors::StorageError;

/// In-process store. Clones share the same map, so a second profile store
/// built from a clone sees what the first one persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    values: HashMap<String, String>,
    failing_reads: HashSet<String>,
    // key -> number of writes still to reject
    failing_writes: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `get` of `key` fail until cleared.
    pub fn fail_reads(&self, key: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_reads.insert(key.to_string());
        }
    }

    /// Rejects the next `times` writes (set or remove) to `key`.
    pub fn fail_writes(&self, key: &str, times: u32) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(key.to_string(), times);
        }
    }

    pub fn clear_failures(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_reads.clear();
            inner.failing_writes.clear();
        }
    }

    /// Raw stored text, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.values.get(key).cloned())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn take_write_failure(inner: &mut Inner, key: &str) -> bool {
        match inner.failing_writes.get_mut(key) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StorageError::NotAvailable("memory store lock poisoned".to_string()))?;
        if inner.failing_reads.contains(key) {
            return Err(StorageError::backend(key, "injected read failure"));
        }
        Ok(inner.values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StorageError::NotAvailable("memory store lock poisoned".to_string()))?;
        if Self::take_write_failure(&mut inner, key) {
            return Err(StorageError::backend(key, "injected write failure"));
        }
        inner.values.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StorageError::NotAvailable("memory store lock poisoned".to_string()))?;
        if Self::take_write_failure(&mut inner, key) {
            return Err(StorageError::backend(key, "injected write failure"));
        }
        inner.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_values() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("hobbies", "[]".to_string()).await.unwrap();
        assert_eq!(b.get("hobbies").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_write_failures_are_counted_down() {
        let kv = MemoryStore::new();
        kv.fail_writes("skills", 2);
        assert!(kv.set("skills", "[]".to_string()).await.is_err());
        assert!(kv.set("skills", "[]".to_string()).await.is_err());
        assert!(kv.set("skills", "[]".to_string()).await.is_ok());
        assert_eq!(kv.raw("skills").as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let kv = MemoryStore::new();
        kv.remove("objective").await.unwrap();
        assert!(kv.is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_only_hits_that_key() {
        let kv = MemoryStore::new();
        kv.set("skills", "[]".to_string()).await.unwrap();
        kv.set("projects", "[]".to_string()).await.unwrap();
        kv.fail_reads("skills");
        assert!(kv.get("skills").await.is_err());
        assert!(kv.get("projects").await.is_ok());
        kv.clear_failures();
        assert!(kv.get("skills").await.is_ok());
    }
}
