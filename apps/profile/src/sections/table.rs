//! The dispatch table: one row per category, holding everything a section
//! screen needs. Built at compile time; `test_table_covers_every_category`
//! keeps it complete.

use super::card::{Badge, Card};
use super::category::{Category, FormRoute, Record};
use crate::models::ProfileState;

pub struct SectionEntry {
    pub category: Category,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub creation_target: FormRoute,
    accessor: fn(&ProfileState) -> Vec<Record<'_>>,
    presenter: fn(&Record<'_>) -> Option<Card>,
}

impl SectionEntry {
    pub fn records<'a>(&self, state: &'a ProfileState) -> Vec<Record<'a>> {
        (self.accessor)(state)
    }

    /// `None` when `record` belongs to another category.
    pub fn present(&self, record: &Record<'_>) -> Option<Card> {
        (self.presenter)(record)
    }
}

pub static SECTIONS: [SectionEntry; 10] = [
    SectionEntry {
        category: Category::Experience,
        display_name: "Experience",
        icon: "briefcase",
        creation_target: FormRoute::AddExperience,
        accessor: experience_records,
        presenter: present_experience,
    },
    SectionEntry {
        category: Category::Skills,
        display_name: "Skills",
        icon: "trophy",
        creation_target: FormRoute::AddSkill,
        accessor: skill_records,
        presenter: present_skill,
    },
    SectionEntry {
        category: Category::Projects,
        display_name: "Projects",
        icon: "rocket",
        creation_target: FormRoute::AddProjects,
        accessor: project_records,
        presenter: present_project,
    },
    SectionEntry {
        category: Category::Qualifications,
        display_name: "Qualifications",
        icon: "school",
        creation_target: FormRoute::AddQualifications,
        accessor: qualification_records,
        presenter: present_qualification,
    },
    SectionEntry {
        category: Category::Languages,
        display_name: "Languages",
        icon: "language",
        creation_target: FormRoute::AddLanguage,
        accessor: language_records,
        presenter: present_language,
    },
    SectionEntry {
        category: Category::Hobbies,
        display_name: "Hobbies/Interests",
        icon: "heart",
        creation_target: FormRoute::AddHobby,
        accessor: hobby_records,
        presenter: present_hobby,
    },
    SectionEntry {
        category: Category::Certificates,
        display_name: "Certificates",
        icon: "document",
        creation_target: FormRoute::AddCertificates,
        accessor: certificate_records,
        presenter: present_certificate,
    },
    SectionEntry {
        category: Category::Awards,
        display_name: "Awards/Scholarships",
        icon: "trophy",
        creation_target: FormRoute::AddAwardsScholarships,
        accessor: award_records,
        presenter: present_award,
    },
    SectionEntry {
        category: Category::Organizations,
        display_name: "Organizations",
        icon: "business",
        creation_target: FormRoute::AddOrganization,
        accessor: organization_records,
        presenter: present_organization,
    },
    SectionEntry {
        category: Category::References,
        display_name: "References",
        icon: "person",
        creation_target: FormRoute::AddReferences,
        accessor: reference_records,
        presenter: present_reference,
    },
];

pub fn entry(category: Category) -> &'static SectionEntry {
    // ALL and SECTIONS share an order.
    &SECTIONS[category as usize]
}

// ── accessors ──────────────────────────────────────────────────────────────

fn experience_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.experiences.iter().map(Record::Experience).collect()
}

fn skill_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.skills.iter().map(Record::Skill).collect()
}

fn project_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.projects.iter().map(Record::Project).collect()
}

fn qualification_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.qualifications.iter().map(Record::Qualification).collect()
}

fn language_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.languages.iter().map(Record::Language).collect()
}

fn hobby_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.hobbies.iter().map(Record::Hobby).collect()
}

fn certificate_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.certificates.iter().map(Record::Certificate).collect()
}

fn award_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.awards.iter().map(Record::Award).collect()
}

fn organization_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.organizations.iter().map(Record::Organization).collect()
}

fn reference_records(state: &ProfileState) -> Vec<Record<'_>> {
    state.references.iter().map(Record::Reference).collect()
}

// ── presenters ─────────────────────────────────────────────────────────────

fn present_experience(record: &Record<'_>) -> Option<Card> {
    let Record::Experience(e) = record else {
        return None;
    };
    Some(
        Card::new(&e.job_title, "briefcase")
            .subtitle(format!("{} • {}", e.company_name, e.location))
            .description(Some(e.description.as_str()))
            .detail(e.duration.clone()),
    )
}

fn present_skill(record: &Record<'_>) -> Option<Card> {
    let Record::Skill(s) = record else {
        return None;
    };
    Some(Card::new(&s.skill_name, "trophy").badge(Badge::proficiency(&s.proficiency)))
}

fn present_project(record: &Record<'_>) -> Option<Card> {
    let Record::Project(p) = record else {
        return None;
    };
    Some(
        Card::new(&p.project_name, "rocket")
            .subtitle(p.role.clone())
            .description(Some(p.description.as_str()))
            .detail(format!("Duration: {}", p.duration)),
    )
}

fn present_qualification(record: &Record<'_>) -> Option<Card> {
    let Record::Qualification(q) = record else {
        return None;
    };
    Some(
        Card::new(&q.degree, "school")
            .subtitle(q.institution.clone())
            .description(q.description.as_deref())
            .detail(format!("Duration: {}", q.duration))
            .optional_detail("Grade", q.grade.as_deref()),
    )
}

fn present_language(record: &Record<'_>) -> Option<Card> {
    let Record::Language(l) = record else {
        return None;
    };
    Some(Card::new(&l.language, "language").badge(Badge::proficiency(&l.proficiency)))
}

fn present_hobby(record: &Record<'_>) -> Option<Card> {
    let Record::Hobby(h) = record else {
        return None;
    };
    Some(Card::new(&h.hobby, "heart"))
}

fn present_certificate(record: &Record<'_>) -> Option<Card> {
    let Record::Certificate(c) = record else {
        return None;
    };
    Some(
        Card::new(&c.certificate_name, "document")
            .subtitle(c.issuing_organization.clone())
            .description(c.description.as_deref())
            .detail(format!("Issue Date: {}", c.issue_date))
            .optional_detail("Expires", c.expiration_date.as_deref()),
    )
}

fn present_award(record: &Record<'_>) -> Option<Card> {
    let Record::Award(a) = record else {
        return None;
    };
    Some(
        Card::new(&a.award_name, "trophy")
            .subtitle(a.issuing_organization.clone())
            .description(a.description.as_deref())
            .detail(format!("Date Received: {}", a.date_received)),
    )
}

fn present_organization(record: &Record<'_>) -> Option<Card> {
    let Record::Organization(o) = record else {
        return None;
    };
    Some(
        Card::new(&o.organization_name, "business")
            .subtitle(format!("Role: {}", o.role))
            .description(o.description.as_deref())
            .detail(format!("Duration: {}", o.duration)),
    )
}

fn present_reference(record: &Record<'_>) -> Option<Card> {
    let Record::Reference(r) = record else {
        return None;
    };
    Some(
        Card::new(&r.name, "person")
            .subtitle(format!("{} at {}", r.position, r.company))
            .detail(format!("Email: {}", r.email))
            .detail(format!("Phone: {}", r.phone)),
    )
}
