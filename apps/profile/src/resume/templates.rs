use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateLayout {
    SingleColumn,
    TwoColumn,
}

/// A visual resume template offered on the templates screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    /// Background colour of the preview card.
    pub color: &'static str,
    pub layout: TemplateLayout,
}

const TEMPLATES: [Template; 6] = [
    Template {
        id: "1",
        name: "Professional",
        color: "white",
        layout: TemplateLayout::TwoColumn,
    },
    Template {
        id: "2",
        name: "Modern",
        color: "#E5E7EB",
        layout: TemplateLayout::SingleColumn,
    },
    Template {
        id: "3",
        name: "Creative",
        color: "#FEE2E2",
        layout: TemplateLayout::TwoColumn,
    },
    Template {
        id: "4",
        name: "Classic",
        color: "#E0F2FE",
        layout: TemplateLayout::SingleColumn,
    },
    Template {
        id: "5",
        name: "Elegant",
        color: "#ECFDF5",
        layout: TemplateLayout::TwoColumn,
    },
    Template {
        id: "6",
        name: "Minimalist",
        color: "#FEF3C7",
        layout: TemplateLayout::SingleColumn,
    },
];

pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

pub fn find_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id.trim())
}

/// Case-insensitive lookup by display name.
pub fn find_template_by_name(name: &str) -> Option<&'static Template> {
    TEMPLATES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}
