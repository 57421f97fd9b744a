use crate::errors::StorageError;
use crate::models::ProfileState;
use crate::storage::{get_json, KeyValueStore};

/// The twelve storage keys. The string forms are persisted and must not change
/// without a migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKey {
    PersonalDetails,
    Objective,
    Skills,
    Projects,
    Experiences,
    Hobbies,
    Qualifications,
    Languages,
    Certificates,
    Awards,
    Organizations,
    References,
}

impl ProfileKey {
    pub const ALL: [ProfileKey; 12] = [
        ProfileKey::PersonalDetails,
        ProfileKey::Objective,
        ProfileKey::Skills,
        ProfileKey::Projects,
        ProfileKey::Experiences,
        ProfileKey::Hobbies,
        ProfileKey::Qualifications,
        ProfileKey::Languages,
        ProfileKey::Certificates,
        ProfileKey::Awards,
        ProfileKey::Organizations,
        ProfileKey::References,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKey::PersonalDetails => "personalDetails",
            ProfileKey::Objective => "objective",
            ProfileKey::Skills => "skills",
            ProfileKey::Projects => "projects",
            ProfileKey::Experiences => "experiences",
            ProfileKey::Hobbies => "hobbies",
            ProfileKey::Qualifications => "qualifications",
            ProfileKey::Languages => "languages",
            ProfileKey::Certificates => "certificates",
            ProfileKey::Awards => "awards",
            ProfileKey::Organizations => "organizations",
            ProfileKey::References => "references",
        }
    }

    pub fn is_singleton(self) -> bool {
        matches!(self, ProfileKey::PersonalDetails | ProfileKey::Objective)
    }
}

/// Encodes one slot of `state`. `None` means the slot is absent and the key
/// should be removed.
pub(crate) fn encode_slot(
    state: &ProfileState,
    key: ProfileKey,
) -> Result<Option<String>, StorageError> {
    fn text<T: serde::Serialize + ?Sized>(
        key: ProfileKey,
        value: &T,
    ) -> Result<Option<String>, StorageError> {
        serde_json::to_string(value)
            .map(Some)
            .map_err(|e| StorageError::serialization(key.as_str(), e))
    }

    match key {
        ProfileKey::PersonalDetails => match &state.personal_details {
            Some(details) => text(key, details),
            None => Ok(None),
        },
        ProfileKey::Objective => match &state.objective {
            Some(objective) => text(key, objective),
            None => Ok(None),
        },
        ProfileKey::Skills => text(key, &state.skills),
        ProfileKey::Projects => text(key, &state.projects),
        ProfileKey::Experiences => text(key, &state.experiences),
        ProfileKey::Hobbies => text(key, &state.hobbies),
        ProfileKey::Qualifications => text(key, &state.qualifications),
        ProfileKey::Languages => text(key, &state.languages),
        ProfileKey::Certificates => text(key, &state.certificates),
        ProfileKey::Awards => text(key, &state.awards),
        ProfileKey::Organizations => text(key, &state.organizations),
        ProfileKey::References => text(key, &state.references),
    }
}

/// Reads one key into its slot of `state`. On error the slot is untouched.
pub(crate) async fn load_slot(
    kv: &dyn KeyValueStore,
    key: ProfileKey,
    state: &mut ProfileState,
) -> Result<(), StorageError> {
    let k = key.as_str();
    match key {
        ProfileKey::PersonalDetails => state.personal_details = get_json(kv, k).await?,
        ProfileKey::Objective => state.objective = get_json(kv, k).await?,
        ProfileKey::Skills => state.skills = get_json(kv, k).await?.unwrap_or_default(),
        ProfileKey::Projects => state.projects = get_json(kv, k).await?.unwrap_or_default(),
        ProfileKey::Experiences => {
            state.experiences = get_json(kv, k).await?.unwrap_or_default()
        }
        ProfileKey::Hobbies => state.hobbies = get_json(kv, k).await?.unwrap_or_default(),
        ProfileKey::Qualifications => {
            state.qualifications = get_json(kv, k).await?.unwrap_or_default()
        }
        ProfileKey::Languages => state.languages = get_json(kv, k).await?.unwrap_or_default(),
        ProfileKey::Certificates => {
            state.certificates = get_json(kv, k).await?.unwrap_or_default()
        }
        ProfileKey::Awards => state.awards = get_json(kv, k).await?.unwrap_or_default(),
        ProfileKey::Organizations => {
            state.organizations = get_json(kv, k).await?.unwrap_or_default()
        }
        ProfileKey::References => state.references = get_json(kv, k).await?.unwrap_or_default(),
    }
    Ok(())
}
