//! Form-layer policy: required-field checks and record construction.
//!
//! The profile store accepts any well-shaped record. Screens run a draft
//! through `validate()` first and only call the store once it passes.

pub mod dates;
mod drafts;

pub use dates::{format_duration, format_long_date, format_month_year};
pub use drafts::{
    AwardDraft, CertificateDraft, ExperienceDraft, HobbyDraft, LanguageDraft, ObjectiveDraft,
    OrganizationDraft, PersonalDetailsDraft, ProjectDraft, QualificationDraft, ReferenceDraft,
    SkillDraft,
};

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use serde::Serialize;

pub const SKILL_PROFICIENCIES: &[&str] = &["Beginner", "Intermediate", "Advanced", "Expert"];

pub const LANGUAGE_PROFICIENCIES: &[&str] = &["Native", "Fluent", "Advanced", "Intermediate", "Basic"];

/// Objectives shorter than this (trimmed) are rejected.
pub const MIN_OBJECTIVE_LEN: usize = 10;

/// Field name -> message, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<&'static str, String>,
}

impl FormValidation {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Collects field errors for one form.
#[derive(Default)]
pub(crate) struct Checker {
    errors: BTreeMap<&'static str, String>,
}

impl Checker {
    pub fn required(&mut self, field: &'static str, label: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, format!("{label} is required"));
        }
        self
    }

    pub fn required_when<T>(
        &mut self,
        field: &'static str,
        label: &str,
        value: &Option<T>,
        needed: bool,
    ) -> &mut Self {
        if needed && value.is_none() {
            self.fail(field, format!("{label} is required"));
        }
        self
    }

    pub fn email(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, "Email is required".to_string());
        } else if !looks_like_email(value.trim()) {
            self.fail(field, message.to_string());
        }
        self
    }

    pub fn fail(&mut self, field: &'static str, message: String) -> &mut Self {
        self.errors.entry(field).or_insert(message);
        self
    }

    pub fn finish(&mut self) -> FormValidation {
        let errors = std::mem::take(&mut self.errors);
        FormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// `local@domain.tld` with no whitespace and exactly one `@`. Dots inside the
/// domain are not otherwise checked.
pub fn looks_like_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Trimmed text, or `None` when blank.
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
