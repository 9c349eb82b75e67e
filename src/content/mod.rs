//! Static portfolio records and the helpers their cards need.

mod assets;
mod certifications;
mod dates;
mod deep_link;
mod experience;
mod projects;
mod skills;
mod text;

pub use assets::{FallbackChain, PLACEHOLDER_COVER, cover_candidates, logo_candidates};
pub use certifications::{ALL_BULLET, Bullet, CERTIFICATIONS, CertCard, CertSource, CertTag, Certification, visible_certifications};
pub use dates::{format_month_year, parse_year_month, tenure};
pub use deep_link::{CardKind, card_fragment, opened_card};
pub use experience::{
	EXPERIENCE, Experience, LinkRef, WorkMode, XpCategory, YearGroup, filter_experience, find_experience, group_by_year,
};
pub use projects::{Attachment, Cover, PROJECTS, Project, find_project};
pub use skills::{
	CLOUD_SKILLS, CloudSkill, Placement, SKILLS, Skill, SkillGroup, place_cloud, prism_seeds, shuffled_cloud,
};
pub use text::{KeySkills, chip_overflow, first_paragraph, first_sentence, initials, split_key_skills, typeset_dashes};
