use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::models::{
    Award, Certificate, Experience, Hobby, Language, Organization, Project, Qualification,
    Reference, Skill,
};
use crate::store::ProfileKey;

/// The ten list sections of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Experience,
    Skills,
    Projects,
    Qualifications,
    Languages,
    Hobbies,
    Certificates,
    Awards,
    Organizations,
    References,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown profile section: '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Experience,
        Category::Skills,
        Category::Projects,
        Category::Qualifications,
        Category::Languages,
        Category::Hobbies,
        Category::Certificates,
        Category::Awards,
        Category::Organizations,
        Category::References,
    ];

    /// Section identifier used by the screens.
    pub fn id(self) -> &'static str {
        match self {
            Category::Experience => "experience",
            Category::Skills => "skills",
            Category::Projects => "projects",
            Category::Qualifications => "qualifications",
            Category::Languages => "languages",
            Category::Hobbies => "hobbies/interests",
            Category::Certificates => "certificates",
            Category::Awards => "awards/scholarships",
            Category::Organizations => "organizations",
            Category::References => "references",
        }
    }

    pub fn storage_key(self) -> ProfileKey {
        match self {
            Category::Experience => ProfileKey::Experiences,
            Category::Skills => ProfileKey::Skills,
            Category::Projects => ProfileKey::Projects,
            Category::Qualifications => ProfileKey::Qualifications,
            Category::Languages => ProfileKey::Languages,
            Category::Hobbies => ProfileKey::Hobbies,
            Category::Certificates => ProfileKey::Certificates,
            Category::Awards => ProfileKey::Awards,
            Category::Organizations => ProfileKey::Organizations,
            Category::References => ProfileKey::References,
        }
    }

    /// Accepts either the section id or the storage key, ignoring case and
    /// surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Category> {
        let needle = raw.trim();
        Category::ALL.into_iter().find(|c| {
            needle.eq_ignore_ascii_case(c.id()) || needle.eq_ignore_ascii_case(c.storage_key().as_str())
        })
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Creation form screens, one per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormRoute {
    AddExperience,
    AddSkill,
    AddProjects,
    AddQualifications,
    AddLanguage,
    AddHobby,
    AddCertificates,
    AddAwardsScholarships,
    AddOrganization,
    AddReferences,
}

impl FormRoute {
    pub fn as_str(self) -> &'static str {
        match self {
            FormRoute::AddExperience => "AddExperience",
            FormRoute::AddSkill => "AddSkill",
            FormRoute::AddProjects => "AddProjects",
            FormRoute::AddQualifications => "AddQualifications",
            FormRoute::AddLanguage => "AddLanguage",
            FormRoute::AddHobby => "AddHobby",
            FormRoute::AddCertificates => "AddCertificates",
            FormRoute::AddAwardsScholarships => "AddAwardsScholarships",
            FormRoute::AddOrganization => "AddOrganization",
            FormRoute::AddReferences => "AddReferences",
        }
    }
}

impl fmt::Display for FormRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed record from one of the list categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    Experience(&'a Experience),
    Skill(&'a Skill),
    Project(&'a Project),
    Qualification(&'a Qualification),
    Language(&'a Language),
    Hobby(&'a Hobby),
    Certificate(&'a Certificate),
    Award(&'a Award),
    Organization(&'a Organization),
    Reference(&'a Reference),
}

impl Record<'_> {
    pub fn category(&self) -> Category {
        match self {
            Record::Experience(_) => Category::Experience,
            Record::Skill(_) => Category::Skills,
            Record::Project(_) => Category::Projects,
            Record::Qualification(_) => Category::Qualifications,
            Record::Language(_) => Category::Languages,
            Record::Hobby(_) => Category::Hobbies,
            Record::Certificate(_) => Category::Certificates,
            Record::Award(_) => Category::Awards,
            Record::Organization(_) => Category::Organizations,
            Record::Reference(_) => Category::References,
        }
    }
}
