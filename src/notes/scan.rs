//! Read path: walk the PARA folders and decode every Markdown file.
//!
//! Scanning is best-effort. A missing folder is skipped, and so is any single file
//! that cannot be read or whose metadata is unavailable. Only a folder that exists
//! but cannot be listed fails the whole scan.

use chrono::{DateTime, Local};
use std::io::ErrorKind;
use std::path::Path;

use super::frontmatter;
use super::types::{Folder, Note};
use crate::error::NoteError;

/// Extension of note files.
pub const NOTE_EXTENSION: &str = "md";

/// Decode every note under `root`, folder by folder in [`Folder::ALL`] order.
///
/// Within a folder, notes come back in directory-listing order.
pub fn scan(root: &Path) -> Result<Vec<Note>, NoteError> {
    let mut notes = Vec::new();

    for folder in Folder::ALL {
        let dir = root.join(folder.as_str());
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "folder missing, skipping");
                continue;
            }
            Err(source) => return Err(NoteError::ReadFolder { path: dir, source }),
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || !is_note_file(&path) {
                continue;
            }
            match read_note(&path, folder) {
                Ok(note) => notes.push(note),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "skipping unreadable note");
                }
            }
        }
    }

    tracing::debug!(root = %root.display(), count = notes.len(), "scan complete");
    Ok(notes)
}

/// Decode one note file and stamp it with its folder and modification time.
pub fn read_note(path: &Path, folder: Folder) -> std::io::Result<Note> {
    let raw = std::fs::read_to_string(path)?;
    let modified = std::fs::metadata(path)?.modified()?;
    let decoded = frontmatter::decode(&raw);

    Ok(Note {
        frontmatter: decoded.frontmatter,
        body: decoded.body,
        path: path.to_path_buf(),
        folder,
        modified_at: DateTime::<Local>::from(modified),
    })
}

fn is_note_file(path: &Path) -> bool {
    path.extension().map(|e| e == NOTE_EXTENSION).unwrap_or(false)
}
