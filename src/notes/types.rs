//! Core note type definitions.
//!
//! Defines [`Folder`] (the PARA taxonomy), [`Frontmatter`] (the structured header),
//! [`Note`] (a scanned, read-only snapshot of one file), and [`TemplateKind`]
//! (which skeleton a new note is built from).

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The fixed PARA folders, plus Archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Folder {
    /// Unsorted captures; filenames are date-prefixed.
    Inbox,
    /// Short-term efforts with a goal; always built from the project template.
    Projects,
    /// Ongoing responsibilities.
    Areas,
    /// Reference material; the only folder that asks for URLs.
    Resources,
    /// Inactive items from any of the above. Scanned, but never offered on creation.
    Archive,
}

impl Folder {
    /// Every folder, in scan order.
    pub const ALL: [Folder; 5] = [
        Self::Inbox,
        Self::Projects,
        Self::Areas,
        Self::Resources,
        Self::Archive,
    ];

    /// Folders offered by the creation menu, in menu order.
    pub const CREATABLE: [Folder; 4] = [Self::Inbox, Self::Projects, Self::Areas, Self::Resources];

    /// Directory name under the notes root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Projects => "Projects",
            Self::Areas => "Areas",
            Self::Resources => "Resources",
            Self::Archive => "Archive",
        }
    }

    /// Template used when creating a note in this folder.
    pub fn template_kind(&self) -> TemplateKind {
        match self {
            Self::Projects => TemplateKind::Project,
            Self::Inbox | Self::Areas | Self::Resources | Self::Archive => TemplateKind::Basic,
        }
    }

    /// Whether new filenames in this folder start with the creation date.
    pub fn date_prefixed(&self) -> bool {
        matches!(self, Self::Inbox | Self::Projects)
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Folder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|folder| folder.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown folder: {s}"))
    }
}

/// Template variant a note is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Basic,
    Project,
}

impl TemplateKind {
    /// File name inside the `_templates` folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Basic => "basic.md",
            Self::Project => "project.md",
        }
    }

    /// Status written into the header of a freshly created note.
    pub fn initial_status(&self) -> &'static str {
        match self {
            Self::Basic => "draft",
            Self::Project => "active",
        }
    }
}

/// Structured header of a note.
///
/// Fields that are absent from a file stay at their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    /// Calendar date as written in the file; never parsed.
    pub date: String,
    /// Insertion order is preserved.
    pub tags: Vec<String>,
    /// Free-form; conventionally `draft` or `active`.
    pub status: String,
    pub aliases: Vec<String>,
}

/// A note file decoded during a scan.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub frontmatter: Frontmatter,
    /// Everything after the header block, leading blank lines included.
    pub body: String,
    pub path: PathBuf,
    /// Folder the file lives in; header fields have no say in this.
    pub folder: Folder,
    pub modified_at: DateTime<Local>,
}

impl Note {
    /// Title for display, with a placeholder for untitled notes.
    pub fn display_title(&self) -> &str {
        if self.frontmatter.title.is_empty() {
            "(untitled)"
        } else {
            &self.frontmatter.title
        }
    }

    /// Header date if present, otherwise the modification date.
    pub fn display_date(&self) -> String {
        if self.frontmatter.date.is_empty() {
            self.modified_at.format("%Y-%m-%d").to_string()
        } else {
            self.frontmatter.date.clone()
        }
    }

    /// `  [a, b]` suffix for display, or an empty string when untagged.
    pub fn tag_suffix(&self) -> String {
        if self.frontmatter.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", self.frontmatter.tags.join(", "))
        }
    }
}
