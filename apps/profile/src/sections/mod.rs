//! Section rendering: maps a category onto its records, a summary card per
//! record, and the form that adds to it.
//!
//! Everything here is a pure read of a `ProfileState` snapshot. Unknown
//! category strings are programming errors in the calling screen; they are
//! logged and answered with an empty result rather than a panic.

mod card;
mod category;
mod menu;
mod table;

pub use card::{Badge, BadgeTier, Card};
pub use category::{Category, FormRoute, Record, UnknownCategory};
pub use menu::{profile_menu, MenuTarget, ProfileSection};
pub use table::{entry, SectionEntry, SECTIONS};

use serde::Serialize;
use tracing::warn;

use crate::models::ProfileState;

/// Everything a section screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub category: Category,
    pub title: &'static str,
    pub icon: &'static str,
    pub cards: Vec<Card>,
    pub empty_message: String,
    pub empty_hint: String,
    pub add_route: FormRoute,
}

impl SectionView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub fn empty_message(category: Category) -> String {
    format!("No {} added yet...", category.id())
}

pub fn empty_hint(category: Category) -> String {
    format!("Click on the plus button to add {}", category.id())
}

/// Read-only dispatcher over one profile snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SectionRenderer<'a> {
    state: &'a ProfileState,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(state: &'a ProfileState) -> Self {
        Self { state }
    }

    /// Current records of `category`, in insertion order. Unknown → empty.
    pub fn records(&self, category: &str) -> Vec<Record<'a>> {
        match resolve(category, "records") {
            Some(c) => self.records_of(c),
            None => Vec::new(),
        }
    }

    pub fn records_of(&self, category: Category) -> Vec<Record<'a>> {
        entry(category).records(self.state)
    }

    /// Card for `record`. `None` when the category is unknown or the record
    /// belongs to a different category.
    pub fn describe(&self, category: &str, record: &Record<'_>) -> Option<Card> {
        let category = resolve(category, "describe")?;
        let card = entry(category).present(record);
        if card.is_none() {
            warn!(
                "describe: {} record passed for section '{category}'",
                record.category()
            );
        }
        card
    }

    /// Form that appends to `category`; `None` ("no route") if unknown.
    pub fn creation_target(&self, category: &str) -> Option<FormRoute> {
        let parsed = Category::parse(category);
        if parsed.is_none() {
            warn!("No route defined for section: {category}");
        }
        parsed.map(|c| entry(c).creation_target)
    }

    pub fn view(&self, category: &str) -> Option<SectionView> {
        resolve(category, "view").map(|c| self.view_of(c))
    }

    pub fn view_of(&self, category: Category) -> SectionView {
        let section = entry(category);
        let cards = section
            .records(self.state)
            .iter()
            .filter_map(|r| section.present(r))
            .collect();
        SectionView {
            category,
            title: section.display_name,
            icon: section.icon,
            cards,
            empty_message: empty_message(category),
            empty_hint: empty_hint(category),
            add_route: section.creation_target,
        }
    }
}

fn resolve(raw: &str, operation: &str) -> Option<Category> {
    let category = Category::parse(raw);
    if category.is_none() {
        warn!("{operation}: unknown section '{raw}'");
    }
    category
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Experience, Hobby, Language, Qualification, Reference, Skill};

    fn skill(name: &str, proficiency: &str) -> Skill {
        Skill {
            skill_name: name.to_string(),
            proficiency: proficiency.to_string(),
        }
    }

    fn experience(title: &str) -> Experience {
        Experience {
            job_title: title.to_string(),
            company_name: "Acme".to_string(),
            location: "Berlin".to_string(),
            duration: "Jan 2020 - Present".to_string(),
            description: "Platform team".to_string(),
            is_currently_working: true,
        }
    }

    fn state() -> ProfileState {
        ProfileState {
            experiences: vec![experience("A"), experience("B"), experience("C")],
            skills: vec![skill("Rust", "Expert"), skill("Go", "Beginner")],
            hobbies: vec![Hobby {
                hobby: "Climbing".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let state = state();
        let renderer = SectionRenderer::new(&state);
        let titles: Vec<_> = renderer
            .records("experience")
            .into_iter()
            .map(|r| match r {
                Record::Experience(e) => e.job_title.clone(),
                other => panic!("unexpected record {other:?}"),
            })
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unknown_category_is_empty_not_a_panic() {
        let state = state();
        let renderer = SectionRenderer::new(&state);
        assert!(renderer.records("not-a-real-category").is_empty());
        assert!(renderer.creation_target("not-a-real-category").is_none());
        assert!(renderer.view("not-a-real-category").is_none());
        let hobby = Hobby {
            hobby: "x".to_string(),
        };
        assert!(renderer
            .describe("not-a-real-category", &Record::Hobby(&hobby))
            .is_none());
    }

    #[test]
    fn test_describe_is_idempotent() {
        let state = state();
        let renderer = SectionRenderer::new(&state);
        let record = Record::Experience(&state.experiences[0]);
        let first = renderer.describe("experience", &record);
        let second = renderer.describe("experience", &record);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_expert_and_native_share_a_tier_beginner_does_not() {
        let state = ProfileState::default();
        let renderer = SectionRenderer::new(&state);
        let expert = skill("X", "Expert");
        let native = skill("X", "Native");
        let beginner = skill("X", "Beginner");

        let tier = |s: &Skill| {
            renderer
                .describe("skills", &Record::Skill(s))
                .and_then(|c| c.badge)
                .map(|b| b.tier)
        };
        assert_eq!(tier(&expert), tier(&native));
        assert_ne!(tier(&expert), tier(&beginner));
        assert_eq!(tier(&expert), Some(BadgeTier::Success));
    }

    #[test]
    fn test_skill_card_shape() {
        let s = skill("Rust", "Advanced");
        let card = SectionRenderer::new(&ProfileState::default())
            .describe("skills", &Record::Skill(&s))
            .unwrap();
        assert_eq!(card.title, "Rust");
        assert_eq!(card.badge_text(), Some("Advanced"));
        assert_eq!(card.badge_color_key(), Some("primary"));
        assert!(card.subtitle.is_none());
    }

    #[test]
    fn test_experience_card_shape() {
        let e = experience("Engineer");
        let card = SectionRenderer::new(&ProfileState::default())
            .describe("experience", &Record::Experience(&e))
            .unwrap();
        assert_eq!(card.subtitle.as_deref(), Some("Acme • Berlin"));
        assert_eq!(card.description.as_deref(), Some("Platform team"));
        assert_eq!(card.details, vec!["Jan 2020 - Present".to_string()]);
        assert_eq!(card.icon, "briefcase");
    }

    #[test]
    fn test_qualification_grade_only_when_present() {
        let mut q = Qualification {
            degree: "BSc".to_string(),
            institution: "ETH".to_string(),
            duration: "Sep 2014 - Jun 2018".to_string(),
            description: None,
            grade: None,
        };
        let state = ProfileState::default();
        let renderer = SectionRenderer::new(&state);
        let card = renderer
            .describe("qualifications", &Record::Qualification(&q))
            .unwrap();
        assert_eq!(card.details, vec!["Duration: Sep 2014 - Jun 2018".to_string()]);

        q.grade = Some("5.8".to_string());
        let card = renderer
            .describe("qualifications", &Record::Qualification(&q))
            .unwrap();
        assert_eq!(card.details.last().map(String::as_str), Some("Grade: 5.8"));
    }

    #[test]
    fn test_reference_and_language_cards() {
        let r = Reference {
            name: "Grace".to_string(),
            position: "Director".to_string(),
            company: "Navy".to_string(),
            email: "g@example.com".to_string(),
            phone: "555".to_string(),
        };
        let l = Language {
            language: "French".to_string(),
            proficiency: "Basic".to_string(),
        };
        let state = ProfileState::default();
        let renderer = SectionRenderer::new(&state);
        let card = renderer.describe("references", &Record::Reference(&r)).unwrap();
        assert_eq!(card.subtitle.as_deref(), Some("Director at Navy"));
        assert_eq!(card.details, vec!["Email: g@example.com", "Phone: 555"]);

        let card = renderer.describe("languages", &Record::Language(&l)).unwrap();
        assert_eq!(card.badge_color_key(), Some("error"));
    }

    #[test]
    fn test_describe_rejects_mismatched_record() {
        let s = skill("Rust", "Expert");
        let state = ProfileState::default();
        let renderer = SectionRenderer::new(&state);
        assert!(renderer.describe("languages", &Record::Skill(&s)).is_none());
    }

    #[test]
    fn test_creation_targets() {
        let state = ProfileState::default();
        let renderer = SectionRenderer::new(&state);
        assert_eq!(renderer.creation_target("skills"), Some(FormRoute::AddSkill));
        assert_eq!(
            renderer.creation_target("hobbies/interests"),
            Some(FormRoute::AddHobby)
        );
        assert_eq!(
            renderer.creation_target("experience").map(|r| r.as_str()),
            Some("AddExperience")
        );
    }

    #[test]
    fn test_view_of_empty_and_filled_sections() {
        let state = state();
        let renderer = SectionRenderer::new(&state);

        let certificates = renderer.view_of(Category::Certificates);
        assert!(certificates.is_empty());
        assert_eq!(certificates.empty_message, "No certificates added yet...");
        assert_eq!(certificates.add_route, FormRoute::AddCertificates);

        let skills = renderer.view("skills").unwrap();
        assert_eq!(skills.title, "Skills");
        assert_eq!(skills.cards.len(), 2);
        assert_eq!(skills.cards[1].badge_color_key(), Some("error"));
    }
}
