//! Raw form input for each record type. `validate()` applies the form's
//! required-field rules; `into_record()` trims text, formats dates and drops
//! blank optional fields.

use chrono::NaiveDate;

use super::dates::{format_duration, format_long_date};
use super::{optional, Checker, FormValidation, MIN_OBJECTIVE_LEN};
use crate::models::{
    Award, Certificate, Experience, Hobby, Language, Objective, Organization, PersonalDetails,
    Project, Qualification, Reference, Skill,
};

#[derive(Debug, Clone, Default)]
pub struct PersonalDetailsDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar: String,
    pub title: String,
}

impl PersonalDetailsDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("name", "Name", &self.name)
            .email("email", &self.email, "Please enter a valid email")
            .required("phone", "Phone number", &self.phone)
            .required("address", "Address", &self.address)
            .finish()
    }

    pub fn into_record(self) -> PersonalDetails {
        PersonalDetails {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            avatar: optional(&self.avatar),
            title: optional(&self.title),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectiveDraft {
    pub text: String,
}

impl ObjectiveDraft {
    pub fn validate(&self) -> FormValidation {
        let mut checker = Checker::default();
        checker.required("text", "Objective", &self.text);
        let len = self.text.trim().chars().count();
        if len > 0 && len < MIN_OBJECTIVE_LEN {
            checker.fail(
                "text",
                format!("Objective should be at least {MIN_OBJECTIVE_LEN} characters"),
            );
        }
        checker.finish()
    }

    pub fn into_record(self) -> Objective {
        Objective {
            text: self.text.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceDraft {
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub is_currently_working: bool,
}

impl ExperienceDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("jobTitle", "Job title", &self.job_title)
            .required("companyName", "Company name", &self.company_name)
            .required("location", "Location", &self.location)
            .required_when("startDate", "Start date", &self.start_date, true)
            .required_when(
                "endDate",
                "End date",
                &self.end_date,
                !self.is_currently_working,
            )
            .required("description", "Description", &self.description)
            .finish()
    }

    pub fn into_record(self) -> Experience {
        Experience {
            job_title: self.job_title.trim().to_string(),
            company_name: self.company_name.trim().to_string(),
            location: self.location.trim().to_string(),
            duration: format_duration(self.start_date, self.end_date, self.is_currently_working),
            description: self.description.trim().to_string(),
            is_currently_working: self.is_currently_working,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkillDraft {
    pub skill_name: String,
    pub proficiency: String,
}

impl SkillDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("skillName", "Skill name", &self.skill_name)
            .required("proficiency", "Proficiency level", &self.proficiency)
            .finish()
    }

    pub fn into_record(self) -> Skill {
        Skill {
            skill_name: self.skill_name.trim().to_string(),
            proficiency: self.proficiency.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub project_name: String,
    pub description: String,
    pub role: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ProjectDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("projectName", "Project name", &self.project_name)
            .required("description", "Description", &self.description)
            .required("role", "Your role", &self.role)
            .required_when("startDate", "Start date", &self.start_date, true)
            .required_when("endDate", "End date", &self.end_date, true)
            .finish()
    }

    pub fn into_record(self) -> Project {
        Project {
            project_name: self.project_name.trim().to_string(),
            description: self.description.trim().to_string(),
            role: self.role.trim().to_string(),
            duration: format_duration(self.start_date, self.end_date, false),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HobbyDraft {
    pub hobby: String,
}

impl HobbyDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("hobby", "Hobby/Interest", &self.hobby)
            .finish()
    }

    pub fn into_record(self) -> Hobby {
        Hobby {
            hobby: self.hobby.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QualificationDraft {
    pub degree: String,
    pub institution: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub grade: String,
}

impl QualificationDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("degree", "Degree", &self.degree)
            .required("institution", "Institution", &self.institution)
            .required_when("startDate", "Start date", &self.start_date, true)
            .required_when("endDate", "End date", &self.end_date, true)
            .finish()
    }

    pub fn into_record(self) -> Qualification {
        Qualification {
            degree: self.degree.trim().to_string(),
            institution: self.institution.trim().to_string(),
            duration: format_duration(self.start_date, self.end_date, false),
            description: optional(&self.description),
            grade: optional(&self.grade),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LanguageDraft {
    pub language: String,
    pub proficiency: String,
}

impl LanguageDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("language", "Language", &self.language)
            .required("proficiency", "Proficiency level", &self.proficiency)
            .finish()
    }

    pub fn into_record(self) -> Language {
        Language {
            language: self.language.trim().to_string(),
            proficiency: self.proficiency.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CertificateDraft {
    pub certificate_name: String,
    pub issuing_organization: String,
    pub issue_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub description: String,
}

impl CertificateDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("certificateName", "Certificate name", &self.certificate_name)
            .required(
                "issuingOrganization",
                "Issuing organization",
                &self.issuing_organization,
            )
            .required_when("issueDate", "Issue date", &self.issue_date, true)
            .finish()
    }

    pub fn into_record(self) -> Certificate {
        Certificate {
            certificate_name: self.certificate_name.trim().to_string(),
            issuing_organization: self.issuing_organization.trim().to_string(),
            issue_date: self.issue_date.map(format_long_date).unwrap_or_default(),
            expiration_date: self.expiration_date.map(format_long_date),
            description: optional(&self.description),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AwardDraft {
    pub award_name: String,
    pub issuing_organization: String,
    pub date_received: Option<NaiveDate>,
    pub description: String,
}

impl AwardDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("awardName", "Award name", &self.award_name)
            .required(
                "issuingOrganization",
                "Issuing organization",
                &self.issuing_organization,
            )
            .required_when("dateReceived", "Date received", &self.date_received, true)
            .finish()
    }

    pub fn into_record(self) -> Award {
        Award {
            award_name: self.award_name.trim().to_string(),
            issuing_organization: self.issuing_organization.trim().to_string(),
            date_received: self.date_received.map(format_long_date).unwrap_or_default(),
            description: optional(&self.description),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrganizationDraft {
    pub organization_name: String,
    pub role: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_currently_active: bool,
    pub description: String,
}

impl OrganizationDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("organizationName", "Organization name", &self.organization_name)
            .required("role", "Role", &self.role)
            .required_when("startDate", "Start date", &self.start_date, true)
            .required_when(
                "endDate",
                "End date",
                &self.end_date,
                !self.is_currently_active,
            )
            .finish()
    }

    pub fn into_record(self) -> Organization {
        Organization {
            organization_name: self.organization_name.trim().to_string(),
            role: self.role.trim().to_string(),
            duration: format_duration(self.start_date, self.end_date, self.is_currently_active),
            description: optional(&self.description),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceDraft {
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

impl ReferenceDraft {
    pub fn validate(&self) -> FormValidation {
        Checker::default()
            .required("name", "Name", &self.name)
            .required("position", "Position", &self.position)
            .required("company", "Company", &self.company)
            .email("email", &self.email, "Please enter a valid email address")
            .required("phone", "Phone number", &self.phone)
            .finish()
    }

    pub fn into_record(self) -> Reference {
        Reference {
            name: self.name.trim().to_string(),
            position: self.position.trim().to_string(),
            company: self.company.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}
