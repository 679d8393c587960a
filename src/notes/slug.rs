//! Filename-safe slugs and tag normalization.

use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]+").expect("valid slug regex"));
static HYPHEN_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("valid hyphen regex"));

/// Slugify a title or tag (e.g. "Golang Tips!" -> "golang-tips").
///
/// Lowercases, replaces every run of characters outside `[a-z0-9-]` with a single
/// hyphen, collapses hyphen runs, and trims hyphens from both ends. All-symbol input
/// yields an empty string.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let replaced = NON_SLUG_RE.replace_all(&lower, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}

/// Split comma-separated tag input into slugs, dropping parts that slugify to nothing.
pub fn normalize_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|part| slugify(part.trim()))
        .filter(|tag| !tag.is_empty())
        .collect()
}
