pub mod profile;
pub mod state;

pub use profile::{
    Award, Certificate, Experience, Hobby, Language, Objective, Organization, PersonalDetails,
    Project, Qualification, Reference, Skill,
};
pub use state::ProfileState;
