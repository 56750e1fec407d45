//! Public repository listing for the featured projects section.
//!
//! The page performs the HTTP request; this module turns the response into
//! a view state and picks what to show.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The subset of the GitHub REST repository object the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub fork: bool,
}

impl Repository {
    pub fn language_color(&self) -> &'static str {
        self.language.as_deref().map_or(FALLBACK_COLOR, language_color)
    }
}

/// Observable states of the listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum FetchState {
    Loading,
    Error(String),
    Ready(Vec<Repository>),
}

impl FetchState {
    /// Build the settled state from an HTTP status and body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if !(200..300).contains(&status) {
            return FetchState::Error(format!("HTTP {}", status));
        }
        match parse_repositories(body) {
            Ok(repos) => FetchState::Ready(repos),
            Err(e) => FetchState::Error(e.to_string()),
        }
    }

    /// Keep only the featured subset when ready.
    pub fn featured(self, limit: usize) -> Self {
        match self {
            FetchState::Ready(repos) => FetchState::Ready(featured(repos, limit)),
            other => other,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }
}

pub fn parse_repositories(json: &str) -> Result<Vec<Repository>> {
    Ok(serde_json::from_str(json)?)
}

/// Drop forks, sort by stars (descending, name as tie-break), keep `limit`.
pub fn featured(mut repos: Vec<Repository>, limit: usize) -> Vec<Repository> {
    repos.retain(|r| !r.fork);
    repos.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| a.name.cmp(&b.name))
    });
    repos.truncate(limit);
    repos
}

const FALLBACK_COLOR: &str = "#8b949e";

static LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("C", "#555555"),
    ("C#", "#178600"),
    ("C++", "#f34b7d"),
    ("CSS", "#563d7c"),
    ("Dart", "#00b4ab"),
    ("Go", "#00add8"),
    ("HTML", "#e34c26"),
    ("Java", "#b07219"),
    ("JavaScript", "#f1e05a"),
    ("Pascal", "#e3f171"),
    ("Python", "#3572a5"),
    ("Rust", "#dea584"),
    ("Shell", "#89e051"),
    ("TypeScript", "#3178c6"),
];

/// Dot color for a repository language. Unknown languages are grey.
pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(language))
        .map_or(FALLBACK_COLOR, |&(_, color)| color)
}
