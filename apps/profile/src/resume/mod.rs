pub mod preview;
pub mod templates;

pub use preview::{ResumeData, ResumePreview};
pub use templates::{find_template, find_template_by_name, templates, Template, TemplateLayout};
