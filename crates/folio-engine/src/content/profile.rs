//! Static profile content: hero text, about section, education, footer, link cards.

use serde::Serialize;

pub const OWNER: &str = "Justin Bornais";

/// A call-to-action link under the hero heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub greeting: &'static str,
    pub title: String,
    pub subtitle: String,
    pub links: [HeroLink; 2],
}

impl Hero {
    /// Hero with optional title/subtitle overrides.
    pub fn new(title: Option<&str>, subtitle: Option<&str>) -> Self {
        Self {
            greeting: "Hello, my name is",
            title: title.unwrap_or(OWNER).to_string(),
            subtitle: subtitle.unwrap_or("Software Developer, Musician").to_string(),
            links: [
                HeroLink { label: "Learn More", href: "#about" },
                HeroLink { label: "Read Blog", href: "/personal-website/blog" },
            ],
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// A tech name highlighted inline, with its text color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub name: &'static str,
    pub class: &'static str,
}

const fn highlight(name: &'static str, class: &'static str) -> Highlight {
    Highlight { name, class }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Portrait {
    pub src: &'static str,
    pub alt: &'static str,
}

/// The "About Me" section. The work paragraph reads
/// `{work_intro} {employer} {work_role}` followed by the highlighted stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct About {
    pub heading: &'static str,
    pub work_intro: &'static str,
    pub employer: HeroLink,
    pub work_role: &'static str,
    pub stack: &'static [Highlight],
    pub music: [&'static str; 2],
    pub portrait: Portrait,
}

pub static ABOUT: About = About {
    heading: "About Me",
    work_intro: "I'm currently working at",
    employer: HeroLink { label: "Tessonics", href: "https://tessonics.com" },
    work_role: "as a Software Developer, where I build robust applications using a diverse tech stack including",
    stack: &[
        highlight("C++", "text-blue-400"),
        highlight("Golang", "text-cyan-400"),
        highlight("Delphi", "text-red-400"),
        highlight("React", "text-sky-400"),
        highlight("TypeScript", "text-blue-500"),
        highlight("Hugo", "text-purple-400"),
        highlight("Flutter", "text-teal-400"),
    ],
    music: [
        "Beyond software development, I'm a passionate musician. I play piano, organ, and guitar, and I also sing. \
         I taught piano for 7 years, helping over 20 students of all ages discover their musical potential.",
        "For the past 4 years, I've had the honor of performing at weddings and funerals, \
         providing impactful musical experiences during life's most significant occasions.",
    ],
    portrait: Portrait { src: "/me.webp", alt: OWNER },
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub graduated: u16,
    pub distinction: &'static str,
    pub major_average: f32,
    pub cumulative_average: f32,
}

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Computer Science (Honours)",
    school: "University of Windsor",
    graduated: 2024,
    distinction: "Great Distinction",
    major_average: 93.8,
    cumulative_average: 92.3,
};

/// Render an average as shown on the education card, e.g. `93.8%`.
pub fn format_average(value: f32) -> String {
    format!("{:.1}%", value)
}

pub fn footer_line(year: i32) -> String {
    format!("\u{a9} {} - {} - All rights reserved", year, OWNER)
}

/// A linked card in a card list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub body: String,
    pub href: String,
}

impl Card {
    pub fn new(title: impl Into<String>, body: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            href: href.into(),
        }
    }

    /// Heading text with the trailing arrow.
    pub fn heading(&self) -> String {
        format!("{} \u{2192}", self.title)
    }
}
