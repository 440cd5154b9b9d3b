pub mod profile;
pub mod project;
pub mod skill;

pub use profile::{Animation, Experience, Profile, SocialLink};
pub use project::ProjectCard;
pub use skill::{SkillCategory, SkillTool};
