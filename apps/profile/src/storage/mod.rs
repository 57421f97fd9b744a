//! Persistence adapter: the narrow get/set/remove contract the profile store
//! is written against, plus the backends shipped with the crate.
//!
//! Values cross the trait as JSON text, so backends never see typed records.
//! `get_json` decodes on the way out; the profile store encodes its own slots.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::errors::StorageError;

/// A string-keyed store of JSON text values.
///
/// Carried by the profile store as `Arc<dyn KeyValueStore>`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored text for `key`, or `None` if it was never set.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting any prior value.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Deletes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and decodes `key`. A stored JSON `null` reads the same as a missing key.
pub async fn get_json<T: DeserializeOwned>(
    kv: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match kv.get(key).await? {
        Some(text) => serde_json::from_str::<Option<T>>(&text)
            .map_err(|e| StorageError::serialization(key, e)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    #[tokio::test]
    async fn test_get_json_decodes_stored_text() {
        let kv = MemoryStore::new();
        kv.set(
            "skills",
            r#"[{"skillName":"Rust","proficiency":"Expert"}]"#.to_string(),
        )
        .await
        .unwrap();

        let back: Option<Vec<Skill>> = get_json(&kv, "skills").await.unwrap();
        let skills = back.unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].skill_name, "Rust");
    }

    #[tokio::test]
    async fn test_stored_null_reads_as_absent() {
        let kv = MemoryStore::new();
        kv.set("objective", "null".to_string()).await.unwrap();
        let value: Option<crate::models::Objective> = get_json(&kv, "objective").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_malformed_text_is_a_serialization_error() {
        let kv = MemoryStore::new();
        kv.set("skills", "{not json".to_string()).await.unwrap();
        let err = get_json::<Vec<Skill>>(&kv, "skills").await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization { ref key, .. } if key == "skills"));
    }
}
