use serde::Serialize;

use super::category::Category;
use crate::models::ProfileState;

/// Where a profile menu entry leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuTarget {
    PersonalDetails,
    Objective,
    Section(Category),
}

/// One row of the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub screen: &'static str,
    pub target: MenuTarget,
}

impl ProfileSection {
    /// 0 or 1 for the singletons, the record count for list sections.
    pub fn entry_count(&self, state: &ProfileState) -> usize {
        match self.target {
            MenuTarget::PersonalDetails => usize::from(state.personal_details.is_some()),
            MenuTarget::Objective => usize::from(state.objective.is_some()),
            MenuTarget::Section(category) => super::entry(category).records(state).len(),
        }
    }
}

const MENU: [ProfileSection; 12] = [
    ProfileSection {
        title: "Personal Details",
        icon: "person-outline",
        screen: "PersonalDetails",
        target: MenuTarget::PersonalDetails,
    },
    ProfileSection {
        title: "Objective",
        icon: "flag-outline",
        screen: "Objective",
        target: MenuTarget::Objective,
    },
    ProfileSection {
        title: "Experience",
        icon: "briefcase-outline",
        screen: "Experience",
        target: MenuTarget::Section(Category::Experience),
    },
    ProfileSection {
        title: "Qualifications",
        icon: "school-outline",
        screen: "Qualifications",
        target: MenuTarget::Section(Category::Qualifications),
    },
    ProfileSection {
        title: "Organizations",
        icon: "book-outline",
        screen: "Organizations",
        target: MenuTarget::Section(Category::Organizations),
    },
    ProfileSection {
        title: "Projects",
        icon: "code-working-outline",
        screen: "Projects",
        target: MenuTarget::Section(Category::Projects),
    },
    ProfileSection {
        title: "Certificates",
        icon: "document-outline",
        screen: "Certificates",
        target: MenuTarget::Section(Category::Certificates),
    },
    ProfileSection {
        title: "Awards/Scholarships",
        icon: "trophy-outline",
        screen: "AwardsScholarships",
        target: MenuTarget::Section(Category::Awards),
    },
    ProfileSection {
        title: "Skills",
        icon: "key-outline",
        screen: "Skills",
        target: MenuTarget::Section(Category::Skills),
    },
    ProfileSection {
        title: "Languages",
        icon: "language-outline",
        screen: "Languages",
        target: MenuTarget::Section(Category::Languages),
    },
    ProfileSection {
        title: "Hobbies/Interests",
        icon: "heart-outline",
        screen: "HobbiesInterests",
        target: MenuTarget::Section(Category::Hobbies),
    },
    ProfileSection {
        title: "References",
        icon: "people-outline",
        screen: "References",
        target: MenuTarget::Section(Category::References),
    },
];

/// Profile screen rows in display order.
pub fn profile_menu() -> &'static [ProfileSection] {
    &MENU
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Objective, Skill};

    #[test]
    fn test_menu_lists_every_section_once() {
        let menu = profile_menu();
        assert_eq!(menu.len(), 12);
        for category in Category::ALL {
            let hits = menu
                .iter()
                .filter(|s| s.target == MenuTarget::Section(category))
                .count();
            assert_eq!(hits, 1, "{category} should appear once");
        }
        assert_eq!(menu[0].target, MenuTarget::PersonalDetails);
        assert_eq!(menu[1].target, MenuTarget::Objective);
    }

    #[test]
    fn test_entry_counts() {
        let state = ProfileState {
            objective: Some(Objective {
                text: "Lead".to_string(),
            }),
            skills: vec![
                Skill {
                    skill_name: "Rust".to_string(),
                    proficiency: "Expert".to_string(),
                },
                Skill {
                    skill_name: "SQL".to_string(),
                    proficiency: "Advanced".to_string(),
                },
            ],
            ..Default::default()
        };
        let counts: Vec<_> = profile_menu()
            .iter()
            .map(|s| (s.screen, s.entry_count(&state)))
            .collect();
        assert!(counts.contains(&("PersonalDetails", 0)));
        assert!(counts.contains(&("Objective", 1)));
        assert!(counts.contains(&("Skills", 2)));
        assert!(counts.contains(&("References", 0)));
    }
}
