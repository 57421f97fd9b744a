//! Profile store: the single in-memory owner of the profile, kept eventually
//! consistent with a [`KeyValueStore`].
//!
//! Mutations take `&mut self`, apply the change in memory, then enqueue a full
//! snapshot for the background persistence task. They never fail and never
//! wait on storage.

mod keys;
mod persist;

pub use keys::ProfileKey;
pub use persist::PersistPolicy;

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::models::{
    Award, Certificate, Experience, Hobby, Language, Objective, Organization, PersonalDetails,
    ProfileState, Project, Qualification, Reference, Skill,
};
use crate::storage::KeyValueStore;
use persist::{run_worker, PersistCommand};

/// Hydrates a profile from `kv`, one key at a time.
///
/// Never fails: a key that cannot be read or decoded is logged and left
/// empty, and the remaining keys still load.
pub async fn load_state(kv: &dyn KeyValueStore) -> ProfileState {
    load_slots(kv).await.0
}

/// Like [`load_state`], also returning the keys that failed to load.
async fn load_slots(kv: &dyn KeyValueStore) -> (ProfileState, HashSet<ProfileKey>) {
    let mut state = ProfileState::default();
    let mut failed = HashSet::new();

    for key in ProfileKey::ALL {
        if let Err(e) = keys::load_slot(kv, key, &mut state).await {
            warn!("Could not load '{}', using empty value: {e}", key.as_str());
            failed.insert(key);
        }
    }

    info!(
        "Profile loaded: {} records, personal details {}, objective {}, {} keys failed",
        state.record_count(),
        if state.personal_details.is_some() { "set" } else { "unset" },
        if state.objective.is_some() { "set" } else { "unset" },
        failed.len(),
    );
    (state, failed)
}

pub struct ProfileStore {
    state: ProfileState,
    /// Keys that failed to load. Snapshots leave them untouched in storage
    /// until the matching command writes them.
    unloaded: HashSet<ProfileKey>,
    tx: mpsc::UnboundedSender<PersistCommand>,
    worker: JoinHandle<()>,
}

impl ProfileStore {
    /// Loads the profile from `kv` and starts the persistence task.
    /// Must be called from within a tokio runtime.
    pub async fn load(kv: Arc<dyn KeyValueStore>, policy: PersistPolicy) -> Self {
        let (state, unloaded) = load_slots(kv.as_ref()).await;
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(kv, policy, rx));
        Self {
            state,
            unloaded,
            tx,
            worker,
        }
    }

    /// Read-only view of the current in-memory profile.
    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn snapshot(&self) -> ProfileState {
        self.state.clone()
    }

    pub fn set_personal_details(&mut self, details: PersonalDetails) {
        self.state.personal_details = Some(details);
        self.changed(ProfileKey::PersonalDetails, "personal details");
    }

    pub fn set_objective(&mut self, objective: Objective) {
        self.state.objective = Some(objective);
        self.changed(ProfileKey::Objective, "objective");
    }

    pub fn add_skill(&mut self, skill: Skill) {
        self.state.skills.push(skill);
        self.changed(ProfileKey::Skills, "skill");
    }

    pub fn add_project(&mut self, project: Project) {
        self.state.projects.push(project);
        self.changed(ProfileKey::Projects, "project");
    }

    pub fn add_experience(&mut self, experience: Experience) {
        self.state.experiences.push(experience);
        self.changed(ProfileKey::Experiences, "experience");
    }

    pub fn add_hobby(&mut self, hobby: Hobby) {
        self.state.hobbies.push(hobby);
        self.changed(ProfileKey::Hobbies, "hobby");
    }

    pub fn add_qualification(&mut self, qualification: Qualification) {
        self.state.qualifications.push(qualification);
        self.changed(ProfileKey::Qualifications, "qualification");
    }

    pub fn add_language(&mut self, language: Language) {
        self.state.languages.push(language);
        self.changed(ProfileKey::Languages, "language");
    }

    pub fn add_certificate(&mut self, certificate: Certificate) {
        self.state.certificates.push(certificate);
        self.changed(ProfileKey::Certificates, "certificate");
    }

    pub fn add_award(&mut self, award: Award) {
        self.state.awards.push(award);
        self.changed(ProfileKey::Awards, "award");
    }

    pub fn add_organization(&mut self, organization: Organization) {
        self.state.organizations.push(organization);
        self.changed(ProfileKey::Organizations, "organization");
    }

    pub fn add_reference(&mut self, reference: Reference) {
        self.state.references.push(reference);
        self.changed(ProfileKey::References, "reference");
    }

    /// Waits until every snapshot enqueued before this call has been written
    /// (or has failed and been logged).
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(PersistCommand::Flush(done_tx)).is_err() {
            warn!("Flush requested but the persistence task is gone");
            return;
        }
        if done_rx.await.is_err() {
            warn!("Persistence task stopped before the flush completed");
        }
    }

    /// Drains pending writes and stops the persistence task.
    pub async fn shutdown(self) {
        let Self { tx, worker, .. } = self;
        drop(tx);
        if let Err(e) = worker.await {
            warn!("Persistence task ended abnormally: {e}");
        }
    }

    fn changed(&mut self, key: ProfileKey, what: &str) {
        debug!("Profile updated: {what}");
        self.unloaded.remove(&key);
        let command = PersistCommand::Write {
            snapshot: Box::new(self.state.clone()),
            skip: self.unloaded.iter().copied().collect(),
        };
        if self.tx.send(command).is_err() {
            warn!("Persistence task is gone; {what} change kept in memory only");
        }
    }
}
