//! Tech stack table shown under the about section.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Blue,
    Amber,
}

/// Utility classes for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeStyle {
    pub bg: &'static str,
    pub border: &'static str,
    pub icon_bg: &'static str,
    pub icon_text: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
}

impl Theme {
    pub const fn style(self) -> ThemeStyle {
        match self {
            Theme::Blue => ThemeStyle {
                bg: "bg-blue-900/20",
                border: "border-blue-500/30",
                icon_bg: "bg-blue-500/20",
                icon_text: "text-blue-400",
                badge: "bg-blue-500/30 text-blue-300",
                title: "text-blue-400",
            },
            Theme::Amber => ThemeStyle {
                bg: "bg-amber-900/20",
                border: "border-amber-500/30",
                icon_bg: "bg-amber-500/20",
                icon_text: "text-amber-400",
                badge: "bg-amber-500/30 text-amber-300",
                title: "text-amber-400",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub years: Option<u8>,
}

const fn skill(name: &'static str, years: u8) -> Skill {
    Skill { name, years: Some(years) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub theme: Theme,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Backend",
        theme: Theme::Blue,
        skills: &[
            skill("Golang", 3),
            skill("Python", 4),
            skill("C++", 3),
            skill("Delphi", 3),
            skill("SQL", 4),
            skill("SQLite", 3),
            skill("Flask", 2),
        ],
    },
    SkillCategory {
        title: "Frontend",
        theme: Theme::Blue,
        skills: &[
            skill("React", 3),
            skill("Astro", 1),
            skill("Hugo", 3),
            skill("Delphi", 3),
            skill("TypeScript", 3),
            skill("JavaScript", 5),
            skill("HTML", 5),
            skill("CSS", 5),
        ],
    },
    SkillCategory {
        title: "Other",
        theme: Theme::Blue,
        skills: &[
            skill("Git", 5),
            skill("Linux", 2),
            skill("GitHub Actions", 3),
            skill("GitHub Copilot", 1),
            skill("Docker", 1),
        ],
    },
    SkillCategory {
        title: "Musical Instruments",
        theme: Theme::Amber,
        skills: &[
            skill("Piano", 18),
            skill("Organ", 5),
            skill("Singing", 10),
            skill("Guitar", 4),
            skill("Trumpet", 8),
            skill("Violin", 3),
            skill("Euphonium", 2),
        ],
    },
];

/// Transition delay for the `index`-th category card.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(100)
}

/// Transition delay for a skill chip: its card's delay plus 50 ms per
/// preceding chip.
pub fn skill_delay_ms(category: usize, skill: usize) -> u32 {
    let chip = u32::try_from(skill).unwrap_or(u32::MAX).saturating_mul(50);
    stagger_delay_ms(category).saturating_add(chip)
}

/// Badge text for a skill, e.g. `3y`. `None` when no duration is listed.
pub fn years_badge(skill: &Skill) -> Option<String> {
    skill.years.map(|y| format!("{}y", y))
}
