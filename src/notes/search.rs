//! Substring relevance search over scanned notes.
//!
//! Every field check is a case-insensitive substring test and contributes a fixed
//! weight at most once:
//!
//! | Field   | Weight |
//! |---------|--------|
//! | title   | 10     |
//! | tags    | 8      |
//! | aliases | 8      |
//! | body    | 3      |
//!
//! Notes scoring zero are dropped. Body matches also yield an excerpt.

use serde::Serialize;

use super::types::Note;
use crate::error::NoteError;

pub const TITLE_WEIGHT: u32 = 10;
pub const TAG_WEIGHT: u32 = 8;
pub const ALIAS_WEIGHT: u32 = 8;
pub const BODY_WEIGHT: u32 = 3;

/// Characters of context kept on each side of an excerpt match.
pub const EXCERPT_CONTEXT: usize = 40;

/// A scored search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub note: Note,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// Score every note against `query` and return the matches, best first.
///
/// The query is trimmed; a blank query fails with [`NoteError::EmptyQuery`]. The sort
/// is stable, so equal scores keep scan order.
pub fn search(notes: Vec<Note>, query: &str) -> Result<Vec<SearchHit>, NoteError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(NoteError::EmptyQuery);
    }

    let mut hits: Vec<SearchHit> = notes
        .into_iter()
        .filter_map(|note| {
            let score = score_note(&note, query);
            if score == 0 {
                return None;
            }
            let excerpt = excerpt(&note.body, query);
            Some(SearchHit {
                note,
                score,
                excerpt,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    tracing::debug!(query, hits = hits.len(), "search complete");
    Ok(hits)
}

/// Relevance of one note for `query`, compared case-insensitively.
pub fn score_note(note: &Note, query: &str) -> u32 {
    let needle = fold(query);
    let contains = |text: &str| find_folded(&fold(text), &needle).is_some();
    let fm = &note.frontmatter;

    let mut score = 0;
    if contains(&fm.title) {
        score += TITLE_WEIGHT;
    }
    if fm.tags.iter().any(|t| contains(t.as_str())) {
        score += TAG_WEIGHT;
    }
    if fm.aliases.iter().any(|a| contains(a.as_str())) {
        score += ALIAS_WEIGHT;
    }
    if contains(&note.body) {
        score += BODY_WEIGHT;
    }
    score
}

/// Window of body text around the first case-insensitive match of `query`.
///
/// Keeps up to [`EXCERPT_CONTEXT`] characters on each side, turns newlines into
/// spaces, trims, and marks clipped sides with `...`. Returns `None` when the body
/// does not contain the query.
pub fn excerpt(body: &str, query: &str) -> Option<String> {
    let chars: Vec<char> = body.chars().collect();
    let hay = fold(body);
    let needle = fold(query);
    if needle.is_empty() {
        return None;
    }

    let idx = find_folded(&hay, &needle)?;
    let start = idx.saturating_sub(EXCERPT_CONTEXT);
    let end = (idx + needle.len() + EXCERPT_CONTEXT).min(chars.len());

    let window: String = chars[start..end]
        .iter()
        .map(|&c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    let prefix = if start > 0 { "..." } else { "" };
    let suffix = if end < chars.len() { "..." } else { "" };
    Some(format!("{prefix}{}{suffix}", window.trim()))
}

/// Per-character lowercase fold that keeps one char per input char, so indices line
/// up with the original text. Final sigma folds to `σ` so that word position does not
/// affect matching.
///
/// Scoring and excerpts both match on this fold; a body that scores always yields an
/// excerpt.
fn fold(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| match c.to_lowercase().next().unwrap_or(c) {
            'ς' => 'σ',
            lower => lower,
        })
        .collect()
}

/// Char index of the first occurrence of `needle` in `hay`.
fn find_folded(hay: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    hay.windows(needle.len()).position(|w| w == needle)
}
