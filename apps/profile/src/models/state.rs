use serde::{Deserialize, Serialize};

use super::profile::{
    Award, Certificate, Experience, Hobby, Language, Objective, Organization, PersonalDetails,
    Project, Qualification, Reference, Skill,
};

/// The whole profile. Singletons are `None` until first set; every list
/// category is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    pub personal_details: Option<PersonalDetails>,
    pub objective: Option<Objective>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub hobbies: Vec<Hobby>,
    pub qualifications: Vec<Qualification>,
    pub languages: Vec<Language>,
    pub certificates: Vec<Certificate>,
    pub awards: Vec<Award>,
    pub organizations: Vec<Organization>,
    pub references: Vec<Reference>,
}

impl ProfileState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Total number of list records across all categories.
    pub fn record_count(&self) -> usize {
        self.skills.len()
            + self.projects.len()
            + self.experiences.len()
            + self.hobbies.len()
            + self.qualifications.len()
            + self.languages.len()
            + self.certificates.len()
            + self.awards.len()
            + self.organizations.len()
            + self.references.len()
    }
}
