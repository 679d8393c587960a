//! CLI `find` command — ranked search over titles, tags, aliases, and bodies.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::NoteError;
use crate::notes::{scan, search};

/// Compact JSON shape of a hit.
#[derive(Debug, Serialize)]
struct HitSummary<'a> {
    title: &'a str,
    folder: String,
    path: &'a PathBuf,
    score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    excerpt: Option<&'a str>,
}

/// Search notes under `root` and print ranked hits with excerpts.
///
/// With `json`, no matches prints `[]` rather than the "no notes found" message.
pub fn find(out: &mut impl Write, root: &Path, query: &str, json: bool) -> Result<()> {
    // Reject blank queries before touching the filesystem.
    if query.trim().is_empty() {
        return Err(NoteError::EmptyQuery.into());
    }

    let notes = scan::scan(root)?;
    let hits = search::search(notes, query)?;

    if json {
        let summaries: Vec<HitSummary> = hits
            .iter()
            .map(|hit| HitSummary {
                title: hit.note.display_title(),
                folder: hit.note.folder.to_string(),
                path: &hit.note.path,
                score: hit.score,
                excerpt: hit.excerpt.as_deref(),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
        return Ok(());
    }

    if hits.is_empty() {
        writeln!(out, "No notes found matching {:?}.", query.trim())?;
        return Ok(());
    }

    for hit in &hits {
        writeln!(
            out,
            "{}  ({}){}",
            hit.note.display_title(),
            hit.note.folder,
            hit.note.tag_suffix()
        )?;
        if let Some(excerpt) = hit.excerpt.as_deref().filter(|e| !e.is_empty()) {
            writeln!(out, "  {excerpt}")?;
        }
    }
    Ok(())
}
