//! Page sections, top to bottom.

mod about;
mod certifications;
mod contact;
mod experience;
mod header;
mod projects;
mod skills;

pub use about::About;
pub use certifications::Certifications;
pub use contact::Contact;
pub use experience::ExperienceTimeline;
pub use header::{Header, SECTION_IDS};
pub use projects::Portfolio;
pub use skills::Skills;
