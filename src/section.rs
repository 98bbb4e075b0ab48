use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the fixed regions of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Work,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct SectionParseError(pub String);

impl Section {
    /// Every section, in the order they appear in the document.
    pub const ALL: [Section; 4] = [Section::Home, Section::About, Section::Work, Section::Contact];

    /// The element id the section is rendered with.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Work => "work",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Work => "Work",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SectionParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order() {
        let ids = Section::ALL.map(Section::id);
        assert_eq!(ids, ["home", "about", "work", "contact"]);
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_parse_known_ids() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_parse_unknown_id() {
        let err = "projects".parse::<Section>().unwrap_err();
        assert_eq!(err, SectionParseError("projects".to_string()));
        assert_eq!(err.to_string(), "unknown section: projects");
        // ids are case sensitive, like element ids
        assert!("Home".parse::<Section>().is_err());
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Section::Contact).unwrap();
        assert_eq!(json, "\"contact\"");
        let back: Section = serde_json::from_str("\"work\"").unwrap();
        assert_eq!(back, Section::Work);
    }
}
