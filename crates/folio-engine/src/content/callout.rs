//! Callout boxes used in blog posts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Note,
    Info,
    Tip,
    Example,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalloutStyle {
    pub bg: &'static str,
    pub border: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
}

impl CalloutKind {
    pub const ALL: [CalloutKind; 5] = [
        Self::Note,
        Self::Info,
        Self::Tip,
        Self::Example,
        Self::Warning,
    ];

    pub const fn style(self) -> CalloutStyle {
        let (bg, border, icon, title) = match self {
            Self::Note => ("bg-blue-900/30", "border-blue-500", "text-blue-400", "Note"),
            Self::Info => ("bg-cyan-900/30", "border-cyan-500", "text-cyan-400", "Info"),
            Self::Tip => ("bg-green-900/30", "border-green-500", "text-green-400", "Tip"),
            Self::Example => ("bg-purple-900/30", "border-purple-500", "text-purple-400", "Example"),
            Self::Warning => ("bg-amber-900/30", "border-amber-500", "text-amber-400", "Warning"),
        };
        CalloutStyle { bg, border, icon, title }
    }
}

/// Unknown callout name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown callout kind: {0}")]
pub struct UnknownCallout(pub String);

impl FromStr for CalloutKind {
    type Err = UnknownCallout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "note" => Ok(Self::Note),
            "info" => Ok(Self::Info),
            "tip" => Ok(Self::Tip),
            "example" => Ok(Self::Example),
            "warning" => Ok(Self::Warning),
            _ => Err(UnknownCallout(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Tip".parse::<CalloutKind>(), Ok(CalloutKind::Tip));
        assert_eq!("WARNING".parse::<CalloutKind>(), Ok(CalloutKind::Warning));
        assert!("danger".parse::<CalloutKind>().is_err());
    }

    #[test]
    fn every_kind_has_distinct_border() {
        let mut borders: Vec<&str> = CalloutKind::ALL.iter().map(|k| k.style().border).collect();
        borders.sort();
        borders.dedup();
        assert_eq!(borders.len(), CalloutKind::ALL.len());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let kind: CalloutKind = serde_json::from_str("\"example\"").unwrap();
        assert_eq!(kind, CalloutKind::Example);
        assert_eq!(kind.style().title, "Example");
    }
}
