// src/modules/content/application/domain/sections.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

//
// ──────────────────────────────────────────────────────────
// Section registry
// ──────────────────────────────────────────────────────────
//

/// One named content document served under `/api/<slug>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Blogs,
    Contact,
    Education,
    Certifications,
}

/// How a section accepts writes.
///
/// - `Rejected`: direct POST answers 405; the generic commit endpoint must
///   be used instead.
/// - `Direct`: POST overwrites the local store.
/// - `Commit`: POST goes through the commit-based provider.
/// - `ReadOnly`: no write surface at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    Rejected,
    Direct,
    Commit,
    ReadOnly,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Home,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Blogs,
        SectionKind::Contact,
        SectionKind::Education,
        SectionKind::Certifications,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "home" => Some(SectionKind::Home),
            "about" => Some(SectionKind::About),
            "skills" => Some(SectionKind::Skills),
            "experience" => Some(SectionKind::Experience),
            "projects" => Some(SectionKind::Projects),
            "blogs" => Some(SectionKind::Blogs),
            "contact" => Some(SectionKind::Contact),
            "education" => Some(SectionKind::Education),
            "certifications" => Some(SectionKind::Certifications),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            SectionKind::Home => "home",
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Blogs => "blogs",
            SectionKind::Contact => "contact",
            SectionKind::Education => "education",
            SectionKind::Certifications => "certifications",
        }
    }

    /// File name inside the local data directory.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.slug())
    }

    /// Path of the document inside the remote repository.
    pub fn repo_path(&self) -> String {
        format!("data/{}.json", self.slug())
    }

    pub fn write_policy(&self) -> WritePolicy {
        match self {
            SectionKind::Home | SectionKind::About => WritePolicy::Rejected,
            SectionKind::Skills | SectionKind::Experience => WritePolicy::Direct,
            SectionKind::Projects | SectionKind::Blogs | SectionKind::Contact => {
                WritePolicy::Commit
            }
            SectionKind::Education | SectionKind::Certifications => WritePolicy::ReadOnly,
        }
    }

    /// The documented default returned when the store has no entry.
    pub fn default_document(&self) -> Value {
        match self {
            SectionKind::Home => serde_json::to_value(HomeContent::default()),
            SectionKind::About => serde_json::to_value(AboutContent::default()),
            SectionKind::Contact => serde_json::to_value(ContactContent::default()),
            _ => Ok(Value::Array(Vec::new())),
        }
        .unwrap_or(Value::Null)
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

//
// ──────────────────────────────────────────────────────────
// Typed documents
// ──────────────────────────────────────────────────────────
// Missing fields deserialize to the documented defaults so the display
// layer never sees null.
//

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeContent {
    pub greeting: String,
    pub name: String,
    pub intro: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    pub description: String,
    pub text_color: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            description: "Write about yourself here.".to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub text_color: String,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            linkedin: String::new(),
            github: String::new(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

pub const DEFAULT_TEXT_COLOR: &str = "#23272f";

/// Icon is a symbolic name resolved to a glyph by the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            name: String::new(),
            icon: "FaCode".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: String,
}

/// `id` is assigned from a timestamp when a row is created through the
/// array-merge write path; rows edited wholesale carry no id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub description: String,
    pub image: String,
}

//
// ──────────────────────────────────────────────────────────
// Normalization
// ──────────────────────────────────────────────────────────
//

/// Re-shape an incoming document through the section's typed form: absent
/// fields pick up their defaults, unknown sections pass through opaque.
/// A document that cannot fit the shape at all is a malformed request.
pub fn normalize_document(kind: SectionKind, value: Value) -> Result<Value, serde_json::Error> {
    fn reshape<T: serde::de::DeserializeOwned + Serialize>(
        value: Value,
    ) -> Result<Value, serde_json::Error> {
        serde_json::to_value(serde_json::from_value::<T>(value)?)
    }

    match kind {
        SectionKind::Home => reshape::<HomeContent>(value),
        SectionKind::About => reshape::<AboutContent>(value),
        SectionKind::Contact => reshape::<ContactContent>(value),
        SectionKind::Skills => reshape::<Vec<Skill>>(value),
        SectionKind::Experience => reshape::<Vec<ExperienceEntry>>(value),
        SectionKind::Projects => reshape::<Vec<Project>>(value),
        SectionKind::Blogs => reshape::<Vec<BlogPost>>(value),
        SectionKind::Education | SectionKind::Certifications => Ok(value),
    }
}
