//! Write path: gather answers, pick a filename, render, and write the note.
//!
//! [`gather_request`] asks the questions, [`create_note`] does the rest. They are kept
//! apart so the write path can be driven without any prompting.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use super::scan::NOTE_EXTENSION;
use super::slug::{normalize_tags, slugify};
use super::template::{build_note_content, NoteDraft};
use super::types::Folder;
use crate::prompt::Prompter;

/// Slug used when a title has no slug-safe characters.
const FALLBACK_SLUG: &str = "untitled";

/// Answers collected for a new note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub title: String,
    pub folder: Folder,
    /// Already normalized to slugs.
    pub tags: Vec<String>,
    pub body: String,
    /// Only ever non-empty for Resources.
    pub urls: Vec<String>,
}

/// Outcome of writing a note.
#[derive(Debug, Clone)]
pub struct CreatedNote {
    pub path: PathBuf,
    /// `true` if a file already existed at `path` and was overwritten.
    pub replaced_existing: bool,
}

/// Ask for title, folder, tags, body and (for Resources) URLs.
pub fn gather_request(prompter: &mut dyn Prompter) -> Result<CreateRequest> {
    let title = prompter.ask_required("Title: ")?;

    let labels: Vec<&str> = Folder::CREATABLE.iter().map(Folder::as_str).collect();
    let folder = Folder::CREATABLE[prompter.choose("Folder:", &labels, 0)?];

    let tags = normalize_tags(&prompter.ask("Tags (comma-separated): ")?);
    let body = prompter.ask("Body: ")?;

    let urls = if folder == Folder::Resources {
        split_urls(&prompter.ask("URLs (comma-separated): ")?)
    } else {
        Vec::new()
    };

    Ok(CreateRequest {
        title,
        folder,
        tags,
        body,
        urls,
    })
}

/// `YYYY-MM-DD-<slug>.md` for Inbox and Projects, `<slug>.md` elsewhere.
pub fn note_file_name(folder: Folder, title: &str, date: NaiveDate) -> String {
    let slug = match slugify(title) {
        s if s.is_empty() => FALLBACK_SLUG.to_string(),
        s => s,
    };
    if folder.date_prefixed() {
        format!("{}-{slug}.{NOTE_EXTENSION}", date.format("%Y-%m-%d"))
    } else {
        format!("{slug}.{NOTE_EXTENSION}")
    }
}

/// Where [`create_note`] will write `request` under `root`.
pub fn note_path(root: &Path, request: &CreateRequest, date: NaiveDate) -> PathBuf {
    root.join(request.folder.as_str())
        .join(note_file_name(request.folder, &request.title, date))
}

/// Render the note for `request` and write it under `root`, dated `date`.
///
/// The destination folder is created if needed. An existing file is overwritten and
/// reported through [`CreatedNote::replaced_existing`].
pub fn create_note(root: &Path, request: &CreateRequest, date: NaiveDate) -> Result<CreatedNote> {
    let dest_dir = root.join(request.folder.as_str());
    let path = note_path(root, request, date);
    let replaced_existing = path.exists();
    if replaced_existing {
        tracing::warn!(path = %path.display(), "note already exists, overwriting");
    }

    let draft = NoteDraft {
        title: request.title.clone(),
        date: date.format("%Y-%m-%d").to_string(),
        tags: request.tags.clone(),
        body: request.body.clone(),
        urls: request.urls.clone(),
        kind: request.folder.template_kind(),
    };
    let content = build_note_content(root, &draft);

    std::fs::create_dir_all(&dest_dir)
        .with_context(|| format!("failed to create directory {}", dest_dir.display()))?;
    write_atomic(&path, &content)?;

    tracing::info!(path = %path.display(), folder = %request.folder, "note created");
    Ok(CreatedNote {
        path,
        replaced_existing,
    })
}

/// Write through a temporary sibling file, then rename into place.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp_path = path.with_extension("md.tmp");
    std::fs::write(&tmp_path, content)
        .with_context(|| format!("failed to write temp file: {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("failed to move note into place: {}", path.display()))?;
    Ok(())
}

fn split_urls(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect()
}
