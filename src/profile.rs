use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    load_profile().unwrap_or_else(|e| {
        log::error!("falling back to an empty profile: {e}");
        Profile::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("embedded content is missing {0}")]
    Missing(&'static str),
    #[error("couldn't parse profile: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub tagline: String,
    pub portrait: String,
    pub about: Vec<String>,
    pub skills: Vec<String>,
    pub competencies: Vec<String>,
    pub projects: Vec<Project>,
    pub contact_blurb: String,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub label: String,
    pub target: String,
}

impl Contact {
    pub fn href(&self) -> String {
        match self.kind {
            ContactKind::Email => format!("mailto:{}", self.target),
            ContactKind::Github | ContactKind::Linkedin => self.target.clone(),
        }
    }

    /// Whether the link leaves the site and should open in a new tab.
    pub fn is_external(&self) -> bool {
        self.kind != ContactKind::Email
    }

    /// Stroke paths of the contact's icon, drawn in a 24x24 viewBox.
    pub fn icon_paths(&self) -> &'static [&'static str] {
        match self.kind {
            ContactKind::Email => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            ContactKind::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            ContactKind::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z",
            ],
        }
    }
}

impl Profile {
    pub fn email(&self) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.kind == ContactKind::Email)
    }
}

pub fn load_profile() -> Result<Profile, ProfileError> {
    let file = Content::get(PROFILE_FILE).ok_or(ProfileError::Missing(PROFILE_FILE))?;
    parse_profile(&file.data)
}

pub fn parse_profile(data: &[u8]) -> Result<Profile, ProfileError> {
    Ok(serde_json::from_slice(data)?)
}

/// The embedded profile, parsed on first use.
pub fn profile() -> &'static Profile {
    &PROFILE
}
