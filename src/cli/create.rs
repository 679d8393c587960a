//! CLI `create` command — the interactive note creation flow.

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

use crate::editor;
use crate::notes::create::{create_note, gather_request, note_path, CreatedNote};
use crate::prompt::Prompter;

/// Ask for the note's details, write it, and offer to open it in `editor_cmd`.
///
/// Warnings and confirmations go through the prompter. Editor failures are reported
/// there too and never fail the command.
pub fn create(
    prompter: &mut dyn Prompter,
    root: &Path,
    date: NaiveDate,
    editor_cmd: Option<&str>,
) -> Result<CreatedNote> {
    let request = gather_request(prompter)?;

    // Warn before writing so the notice shows even if the write fails.
    let dest = note_path(root, &request, date);
    if dest.exists() {
        prompter.notify(&format!("Warning: file already exists: {}", dest.display()))?;
    }
    let created = create_note(root, &request, date)?;
    prompter.notify(&format!("Created: {}", created.path.display()))?;

    if let Some(cmd) = editor_cmd {
        if prompter.confirm("Open in editor?")? {
            if let Err(e) = editor::open_in_editor(cmd, &created.path) {
                tracing::warn!(error = %e, "editor launch failed");
                prompter.notify(&format!("Error opening editor: {e:#}"))?;
            }
        }
    }

    Ok(created)
}
