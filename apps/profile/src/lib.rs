//! Profile core for the resume builder: the persisted profile store, the
//! section renderer the profile screens are built on, form-layer validation
//! helpers, and the template/preview payloads.

pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod resume;
pub mod sections;
pub mod storage;
pub mod store;

pub use errors::StorageError;
pub use models::ProfileState;
pub use sections::{Category, SectionRenderer};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{load_state, PersistPolicy, ProfileKey, ProfileStore};
