//! Recency listing.

use super::types::Note;

/// Number of notes shown when not listing everything.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Notes chosen for display, newest first.
#[derive(Debug)]
pub struct Listing {
    pub notes: Vec<Note>,
    /// Number of notes scanned before truncation.
    pub total: usize,
}

impl Listing {
    /// One display line per shown note: `date  title  (Folder)  [tags]`.
    pub fn lines(&self) -> Vec<String> {
        self.notes.iter().map(format_line).collect()
    }

    /// Whether some notes were left out.
    pub fn is_truncated(&self) -> bool {
        self.notes.len() < self.total
    }

    /// "Showing N of M" notice, only when the listing was truncated.
    pub fn footer(&self) -> Option<String> {
        self.is_truncated().then(|| {
            format!(
                "Showing {} of {} notes. Use --all to show all.",
                self.notes.len(),
                self.total
            )
        })
    }
}

/// Sort notes by modification time, newest first, and keep at most `limit` unless
/// `show_all` is set.
///
/// The sort is stable, so notes with equal modification times keep scan order.
pub fn list(mut notes: Vec<Note>, show_all: bool, limit: usize) -> Listing {
    let total = notes.len();
    notes.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
    if !show_all {
        notes.truncate(limit);
    }
    Listing { notes, total }
}

fn format_line(note: &Note) -> String {
    format!(
        "{}  {}  ({}){}",
        note.display_date(),
        note.display_title(),
        note.folder,
        note.tag_suffix()
    )
}
