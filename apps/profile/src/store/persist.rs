//! Background persistence: the store hands every post-mutation snapshot to
//! this task and returns immediately. The task writes the snapshot key by key.
//!
//! Requests are processed strictly in arrival order and never coalesced, so
//! the last snapshot enqueued is the last one written.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, warn};

use super::keys::{encode_slot, ProfileKey};
use crate::errors::StorageError;
use crate::models::ProfileState;
use crate::storage::KeyValueStore;

/// Retry behaviour for a failed key write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistPolicy {
    /// Extra attempts after the first failure. `0` means write once and give up.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub base_backoff: Duration,
}

impl PersistPolicy {
    pub const fn no_retry() -> Self {
        Self {
            max_retries: 0,
            base_backoff: Duration::ZERO,
        }
    }

    fn backoff_for(&self, retry: u32) -> Duration {
        self.base_backoff
            .saturating_mul(1u32.checked_shl(retry.saturating_sub(1)).unwrap_or(u32::MAX))
    }
}

impl Default for PersistPolicy {
    fn default() -> Self {
        Self::no_retry()
    }
}

pub(crate) enum PersistCommand {
    Write {
        snapshot: Box<ProfileState>,
        /// Keys left as they are in storage.
        skip: Vec<ProfileKey>,
    },
    Flush(oneshot::Sender<()>),
}

/// Outcome of writing one snapshot.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct PersistReport {
    pub written: usize,
    pub failed: Vec<&'static str>,
}

pub(crate) async fn run_worker(
    kv: Arc<dyn KeyValueStore>,
    policy: PersistPolicy,
    mut rx: mpsc::UnboundedReceiver<PersistCommand>,
) {
    while let Some(command) = rx.recv().await {
        match command {
            PersistCommand::Write { snapshot, skip } => {
                let report = persist_snapshot(kv.as_ref(), &policy, &snapshot, &skip).await;
                if report.failed.is_empty() {
                    debug!("Persisted profile snapshot ({} keys)", report.written);
                } else {
                    error!(
                        "Profile snapshot partially persisted: {} keys written, failed: {}",
                        report.written,
                        report.failed.join(", ")
                    );
                }
            }
            PersistCommand::Flush(done) => {
                // The waiter may have given up; nothing to do then.
                let _ = done.send(());
            }
        }
    }
    debug!("Persistence task stopped: profile store dropped");
}

/// Writes every key of `snapshot` except those in `skip`. A failing key does
/// not stop the others.
pub(crate) async fn persist_snapshot(
    kv: &dyn KeyValueStore,
    policy: &PersistPolicy,
    snapshot: &ProfileState,
    skip: &[ProfileKey],
) -> PersistReport {
    let mut report = PersistReport::default();

    for key in ProfileKey::ALL {
        if skip.contains(&key) {
            continue;
        }
        let result = match encode_slot(snapshot, key) {
            Ok(value) => write_with_retry(kv, policy, key, value).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => report.written += 1,
            Err(e) => {
                error!("Failed to persist '{}': {e}", key.as_str());
                report.failed.push(key.as_str());
            }
        }
    }

    report
}

async fn write_with_retry(
    kv: &dyn KeyValueStore,
    policy: &PersistPolicy,
    key: ProfileKey,
    value: Option<String>,
) -> Result<(), StorageError> {
    let mut attempt = 0;
    loop {
        let result = match &value {
            Some(text) => kv.set(key.as_str(), text.clone()).await,
            None => kv.remove(key.as_str()).await,
        };

        match result {
            Ok(()) => return Ok(()),
            Err(e) if attempt < policy.max_retries => {
                attempt += 1;
                let delay = policy.backoff_for(attempt);
                warn!(
                    "Write of '{}' failed ({e}), retry {attempt}/{} after {}ms",
                    key.as_str(),
                    policy.max_retries,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;
    use crate::storage::MemoryStore;

    fn state_with_skill() -> ProfileState {
        ProfileState {
            skills: vec![Skill {
                skill_name: "Rust".to_string(),
                proficiency: "Advanced".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = PersistPolicy {
            max_retries: 3,
            base_backoff: Duration::from_millis(100),
        };
        assert_eq!(policy.backoff_for(1), Duration::from_millis(100));
        assert_eq!(policy.backoff_for(2), Duration::from_millis(200));
        assert_eq!(policy.backoff_for(3), Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_snapshot_writes_every_key() {
        let kv = MemoryStore::new();
        let report = persist_snapshot(&kv, &PersistPolicy::no_retry(), &state_with_skill(), &[]).await;

        assert_eq!(report.written, 12);
        assert!(report.failed.is_empty());
        // ten lists stored, two absent singletons removed
        assert_eq!(kv.len(), 10);
        assert_eq!(
            kv.raw("skills").as_deref(),
            Some(r#"[{"skillName":"Rust","proficiency":"Advanced"}]"#)
        );
        assert!(kv.raw("personalDetails").is_none());
    }

    #[tokio::test]
    async fn test_failed_key_does_not_block_others() {
        let kv = MemoryStore::new();
        kv.fail_writes("skills", 1);
        let report = persist_snapshot(&kv, &PersistPolicy::no_retry(), &state_with_skill(), &[]).await;

        assert_eq!(report.failed, vec!["skills"]);
        assert_eq!(report.written, 11);
        assert!(kv.raw("skills").is_none());
        assert_eq!(kv.raw("projects").as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_skipped_keys_are_left_alone() {
        let kv = MemoryStore::new();
        kv.set("hobbies", r#"[{"hobby":"Chess"}]"#.to_string())
            .await
            .unwrap();
        let report = persist_snapshot(
            &kv,
            &PersistPolicy::no_retry(),
            &state_with_skill(),
            &[ProfileKey::Hobbies],
        )
        .await;

        assert_eq!(report.written, 11);
        assert_eq!(kv.raw("hobbies").as_deref(), Some(r#"[{"hobby":"Chess"}]"#));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failure_is_retried() {
        let kv = MemoryStore::new();
        kv.fail_writes("skills", 2);
        let policy = PersistPolicy {
            max_retries: 2,
            base_backoff: Duration::from_millis(50),
        };
        let report = persist_snapshot(&kv, &policy, &state_with_skill(), &[]).await;

        assert!(report.failed.is_empty());
        assert!(kv.raw("skills").is_some());
    }
}
