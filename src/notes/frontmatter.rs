//! Header block codec.
//!
//! Supports only the flat subset the tool writes: `key: value` scalars, a quoted
//! title, and `[a, b]` inline lists. A file without a complete header block is not
//! an error; it decodes to an empty [`Frontmatter`] with the whole text as body.
//!
//! Values are not escaped. A title containing `"`, or a tag containing `,`, does not
//! survive a round trip.

use super::types::Frontmatter;

/// Line that opens and closes a header block.
pub const SEPARATOR: &str = "---";

/// Result of splitting a note into header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedNote {
    pub frontmatter: Frontmatter,
    pub body: String,
    /// `false` when no complete header block was found.
    pub has_header: bool,
}

/// Split raw note text into its header record and body.
///
/// The header is recognized only when the first line is a bare separator and a later
/// line is one too. The body is everything after the closing separator line.
pub fn decode(raw: &str) -> DecodedNote {
    let lines: Vec<&str> = raw.split('\n').collect();

    let close_idx = if lines.len() >= 2 && lines[0].trim() == SEPARATOR {
        lines
            .iter()
            .skip(1)
            .position(|line| line.trim() == SEPARATOR)
            .map(|pos| pos + 1)
    } else {
        None
    };

    let Some(close_idx) = close_idx else {
        return DecodedNote {
            frontmatter: Frontmatter::default(),
            body: raw.to_string(),
            has_header: false,
        };
    };

    let mut fm = Frontmatter::default();
    for line in &lines[1..close_idx] {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "title" => fm.title = unquote(value).to_string(),
            "date" => fm.date = value.to_string(),
            "tags" => fm.tags = parse_inline_list(value),
            "status" => fm.status = value.to_string(),
            "aliases" => fm.aliases = parse_inline_list(value),
            _ => {}
        }
    }

    DecodedNote {
        frontmatter: fm,
        body: lines[close_idx + 1..].join("\n"),
        has_header: true,
    }
}

/// Render a header block in canonical field order, closing separator and newline included.
pub fn encode(fm: &Frontmatter) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!("title: \"{}\"\n", fm.title));
    out.push_str(&format!("date: {}\n", fm.date));
    out.push_str(&format!("tags: [{}]\n", fm.tags.join(", ")));
    out.push_str(&format!("status: {}\n", fm.status));
    out.push_str(&format!("aliases: [{}]\n", fm.aliases.join(", ")));
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// Strip one pair of surrounding double quotes.
fn unquote(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Parse an inline list like `[a, b, c]`; `[]` yields an empty list.
fn parse_inline_list(s: &str) -> Vec<String> {
    let s = s.trim();
    let s = s.strip_prefix('[').unwrap_or(s);
    let s = s.strip_suffix(']').unwrap_or(s);

    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
