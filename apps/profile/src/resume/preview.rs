use serde::Serialize;

use super::templates::Template;
use crate::models::{
    Award, Certificate, Experience, Hobby, Language, Organization, ProfileState, Project,
    Qualification, Reference, Skill,
};

pub const PLACEHOLDER_NAME: &str = "Your Name";
pub const PLACEHOLDER_EMAIL: &str = "your.email@example.com";
pub const PLACEHOLDER_PHONE: &str = "+1 (555) 123-4567";
pub const PLACEHOLDER_ADDRESS: &str = "Your Address";
pub const PLACEHOLDER_TITLE: &str = "Professional Title";
pub const PLACEHOLDER_OBJECTIVE: &str = "Your professional objective...";

const PREVIEW_EXPERIENCES: usize = 2;
const PREVIEW_SKILLS: usize = 6;

/// Education line derived from a qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Full payload handed to a resume template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub title: String,
    pub objective: String,

    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,

    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub certificates: Vec<Certificate>,
    pub qualifications: Vec<Qualification>,

    pub awards: Vec<Award>,
    pub organizations: Vec<Organization>,
    pub hobbies: Vec<Hobby>,
    pub references: Vec<Reference>,

    pub template: String,
    pub color: String,
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

impl ResumeData {
    /// Every section copied in order; missing personal fields get placeholders.
    pub fn from_state(state: &ProfileState, template: &Template) -> Self {
        let details = state.personal_details.as_ref();
        ResumeData {
            full_name: or_placeholder(details.map(|d| d.name.as_str()), PLACEHOLDER_NAME),
            email: or_placeholder(details.map(|d| d.email.as_str()), PLACEHOLDER_EMAIL),
            phone: or_placeholder(details.map(|d| d.phone.as_str()), PLACEHOLDER_PHONE),
            address: or_placeholder(details.map(|d| d.address.as_str()), PLACEHOLDER_ADDRESS),
            title: or_placeholder(details.and_then(|d| d.title.as_deref()), PLACEHOLDER_TITLE),
            objective: or_placeholder(
                state.objective.as_ref().map(|o| o.text.as_str()),
                PLACEHOLDER_OBJECTIVE,
            ),
            experience: state.experiences.clone(),
            education: state
                .qualifications
                .iter()
                .map(|q| Education {
                    degree: q.degree.clone(),
                    institution: q.institution.clone(),
                    duration: q.duration.clone(),
                    description: q.description.clone(),
                })
                .collect(),
            projects: state.projects.clone(),
            skills: state.skills.clone(),
            languages: state.languages.clone(),
            certificates: state.certificates.clone(),
            qualifications: state.qualifications.clone(),
            awards: state.awards.clone(),
            organizations: state.organizations.clone(),
            hobbies: state.hobbies.clone(),
            references: state.references.clone(),
            template: template.name.to_string(),
            color: template.color.to_string(),
        }
    }
}

/// Experience line on the preview card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewExperience {
    pub job_title: String,
    pub company_name: String,
    pub description: String,
}

/// The trimmed-down view on the template preview screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePreview {
    pub template: String,
    pub color: String,
    pub name: String,
    pub title: String,
    pub email: String,
    pub objective: Option<String>,
    pub experiences: Vec<PreviewExperience>,
    pub skills: Vec<String>,
}

impl ResumePreview {
    pub fn from_state(state: &ProfileState, template: &Template) -> Self {
        let details = state.personal_details.as_ref();
        ResumePreview {
            template: template.name.to_string(),
            color: template.color.to_string(),
            name: or_placeholder(details.map(|d| d.name.as_str()), PLACEHOLDER_NAME),
            title: or_placeholder(details.and_then(|d| d.title.as_deref()), PLACEHOLDER_TITLE),
            email: or_placeholder(details.map(|d| d.email.as_str()), PLACEHOLDER_EMAIL),
            objective: state.objective.as_ref().map(|o| o.text.clone()),
            experiences: state
                .experiences
                .iter()
                .take(PREVIEW_EXPERIENCES)
                .map(|e| PreviewExperience {
                    job_title: e.job_title.clone(),
                    company_name: e.company_name.clone(),
                    description: e.description.clone(),
                })
                .collect(),
            skills: state
                .skills
                .iter()
                .take(PREVIEW_SKILLS)
                .map(|s| s.skill_name.clone())
                .collect(),
        }
    }
}
