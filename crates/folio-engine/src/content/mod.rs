// content/mod.rs
//
// View models for the static parts of the site. Independent of the particle
// field; the page reads these through the web bridge.

pub mod callout;
pub mod profile;
pub mod repos;
pub mod reveal;
pub mod skills;

pub use callout::{CalloutKind, CalloutStyle};
pub use profile::{About, Card, Education, Hero, Highlight, ABOUT, EDUCATION};
pub use repos::{featured, language_color, FetchState, Repository};
pub use reveal::RevealLatch;
pub use skills::{Skill, SkillCategory, Theme, ThemeStyle, SKILL_CATEGORIES};
