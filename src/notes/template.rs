//! Template-driven note assembly.
//!
//! [`build_note_content`] is the single entry point used by note creation: it loads the
//! template for the draft's [`TemplateKind`] from `<root>/_templates/` and runs
//! [`assemble`]; when the template cannot be read it falls back to
//! [`fallback_assemble`], which writes the same section layout from scratch.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::frontmatter::{self, SEPARATOR};
use super::types::{Frontmatter, TemplateKind};
use crate::error::NoteError;

/// Reserved folder under the notes root that holds the templates.
pub const TEMPLATES_DIR: &str = "_templates";

pub const TITLE_PLACEHOLDER: &str = "{{title}}";
pub const DATE_PLACEHOLDER: &str = "{{date}}";

const NOTES_HEADING: &str = "## Notes";
const REFERENCES_HEADING: &str = "## References";

/// Tag every project note carries.
pub const PROJECT_TAG: &str = "project";

/// Template written by `qn init` as `basic.md`.
pub const DEFAULT_BASIC_TEMPLATE: &str = "---
title: \"{{title}}\"
date: {{date}}
tags: []
status: draft
aliases: []
---

# {{title}}

## Notes

## References
";

/// Template written by `qn init` as `project.md`.
pub const DEFAULT_PROJECT_TEMPLATE: &str = "---
title: \"{{title}}\"
date: {{date}}
tags: [project]
status: active
aliases: []
---

# {{title}}

## Goal

## Tasks

- [ ]

## Notes

## Related

## Log

- {{date}} — Project created.
";

/// Everything needed to render a new note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    pub tags: Vec<String>,
    /// Optional free text; empty means none.
    pub body: String,
    pub urls: Vec<String>,
    pub kind: TemplateKind,
}

impl NoteDraft {
    /// Header for the new note: status follows the template kind, and project notes
    /// always carry the `project` tag.
    pub fn frontmatter(&self) -> Frontmatter {
        let mut tags = self.tags.clone();
        if self.kind == TemplateKind::Project && !tags.iter().any(|t| t == PROJECT_TAG) {
            tags.push(PROJECT_TAG.to_string());
        }
        Frontmatter {
            title: self.title.clone(),
            date: self.date.clone(),
            tags,
            status: self.kind.initial_status().to_string(),
            aliases: Vec::new(),
        }
    }
}

/// Path of a template file under the notes root.
pub fn template_path(root: &Path, kind: TemplateKind) -> PathBuf {
    root.join(TEMPLATES_DIR).join(kind.file_name())
}

/// Load a template from `<root>/_templates/`.
pub fn read_template(root: &Path, kind: TemplateKind) -> Result<String, NoteError> {
    let path = template_path(root, kind);
    std::fs::read_to_string(&path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => NoteError::TemplateNotFound {
            name: kind.file_name().to_string(),
            path,
        },
        _ => NoteError::TemplateUnreadable {
            name: kind.file_name().to_string(),
            source,
        },
    })
}

/// Render the final text of a new note, falling back to the built-in layout when the
/// template is unavailable.
pub fn build_note_content(root: &Path, draft: &NoteDraft) -> String {
    match read_template(root, draft.kind) {
        Ok(template) => assemble(&template, draft),
        Err(e) => {
            tracing::warn!(error = %e, "template unavailable, using built-in layout");
            fallback_assemble(draft)
        }
    }
}

/// Fill a template: substitute placeholders, swap in a fresh header block, then insert
/// the body under `## Notes` and the URLs under `## References`.
///
/// A template without a header block gets the fresh header prepended.
pub fn assemble(template: &str, draft: &NoteDraft) -> String {
    let filled = template
        .replace(TITLE_PLACEHOLDER, &draft.title)
        .replace(DATE_PLACEHOLDER, &draft.date);

    let header = frontmatter::encode(&draft.frontmatter());
    let mut content = match header_block_span(&filled) {
        Some((start, end)) => format!("{}{}{}", &filled[..start], header, &filled[end..]),
        None => format!("{header}{filled}"),
    };

    if !draft.body.is_empty() {
        content = insert_body(&content, &draft.body);
    }
    if !draft.urls.is_empty() {
        content = insert_urls(&content, &draft.urls);
    }
    content
}

/// Generate a note without any template.
pub fn fallback_assemble(draft: &NoteDraft) -> String {
    let mut out = frontmatter::encode(&draft.frontmatter());
    out.push_str(&format!("\n# {}\n", draft.title));

    match draft.kind {
        TemplateKind::Project => {
            out.push_str("\n## Goal\n\n");
            if !draft.body.is_empty() {
                out.push_str(&draft.body);
                out.push('\n');
            }
            out.push_str("\n## Tasks\n\n- [ ]\n");
            out.push_str("\n## Notes\n\n");
            out.push_str("\n## Related\n\n");
            out.push_str("\n## Log\n\n");
            out.push_str(&format!("- {} — Project created.\n", draft.date));
        }
        TemplateKind::Basic => {
            out.push_str("\n## Notes\n\n");
            if !draft.body.is_empty() {
                out.push_str(&draft.body);
                out.push('\n');
            }
            out.push_str("\n## References\n");
            if !draft.urls.is_empty() {
                out.push('\n');
                out.push_str(&bullet_list(&draft.urls));
            }
        }
    }
    out
}

/// Byte span from the first separator line through the end of the second one
/// (including its newline, if any).
fn header_block_span(text: &str) -> Option<(usize, usize)> {
    let mut open = None;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim() == SEPARATOR {
            match open {
                None => open = Some(offset),
                Some(start) => return Some((start, offset + line.len())),
            }
        }
        offset += line.len();
    }
    None
}

/// Offset just past `heading` and any newlines that immediately follow it.
fn after_heading(content: &str, heading: &str) -> Option<usize> {
    let idx = content.find(heading)?;
    let rest = &content[idx + heading.len()..];
    let skipped = rest.len() - rest.trim_start_matches('\n').len();
    Some(idx + heading.len() + skipped)
}

fn insert_body(content: &str, body: &str) -> String {
    match after_heading(content, NOTES_HEADING) {
        Some(at) => format!("{}{}\n\n{}", &content[..at], body, &content[at..]),
        None => format!("{content}\n{body}\n"),
    }
}

fn insert_urls(content: &str, urls: &[String]) -> String {
    match after_heading(content, REFERENCES_HEADING) {
        Some(at) => format!("{}{}\n{}", &content[..at], bullet_list(urls), &content[at..]),
        None => format!("{content}\n{REFERENCES_HEADING}\n\n{}", bullet_list(urls)),
    }
}

fn bullet_list(items: &[String]) -> String {
    items.iter().map(|item| format!("- {item}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn draft(kind: TemplateKind) -> NoteDraft {
        NoteDraft {
            title: "Test Note".into(),
            date: "2026-02-13".into(),
            tags: vec!["go".into(), "testing".into()],
            body: String::new(),
            urls: Vec::new(),
            kind,
        }
    }

    #[test]
    fn project_frontmatter_adds_tag_and_active_status() {
        let mut d = draft(TemplateKind::Project);
        d.tags.clear();
        let fm = d.frontmatter();
        assert_eq!(fm.tags, vec!["project"]);
        assert_eq!(fm.status, "active");

        d.tags = vec!["project".into(), "rust".into()];
        assert_eq!(d.frontmatter().tags, vec!["project", "rust"]);
    }

    #[test]
    fn basic_frontmatter_is_draft_and_untouched() {
        let fm = draft(TemplateKind::Basic).frontmatter();
        assert_eq!(fm.tags, vec!["go", "testing"]);
        assert_eq!(fm.status, "draft");
        assert!(fm.aliases.is_empty());
    }

    #[test]
    fn assemble_replaces_header_and_placeholders() {
        let out = assemble(DEFAULT_BASIC_TEMPLATE, &draft(TemplateKind::Basic));
        assert_eq!(
            out,
            "---\ntitle: \"Test Note\"\ndate: 2026-02-13\ntags: [go, testing]\nstatus: draft\naliases: []\n---\n\n# Test Note\n\n## Notes\n\n## References\n"
        );
    }

    #[test]
    fn assemble_inserts_body_under_notes_heading() {
        let template = "---\ntitle: \"{{title}}\"\n---\n## Notes\n\n## References\n";
        let mut d = draft(TemplateKind::Basic);
        d.body = "hello".into();

        let out = assemble(template, &d);
        assert!(out.contains("## Notes\n\nhello\n\n## References"), "{out}");
    }

    #[test]
    fn assemble_appends_body_without_notes_heading() {
        let mut d = draft(TemplateKind::Basic);
        d.body = "loose text".into();
        let out = assemble("---\n---\n# {{title}}\n", &d);
        assert!(out.ends_with("# Test Note\n\nloose text\n"), "{out}");
    }

    #[test]
    fn assemble_inserts_urls_under_references() {
        let mut d = draft(TemplateKind::Basic);
        d.urls = vec!["https://example.com/a".into(), "https://example.com/b".into()];
        let out = assemble(DEFAULT_BASIC_TEMPLATE, &d);
        assert!(
            out.ends_with("## References\n- https://example.com/a\n- https://example.com/b\n\n"),
            "{out}"
        );
    }

    #[test]
    fn assemble_appends_references_section_when_missing() {
        let mut d = draft(TemplateKind::Basic);
        d.urls = vec!["https://example.com".into()];
        let out = assemble("---\n---\n# {{title}}\n", &d);
        assert!(out.ends_with("# Test Note\n\n## References\n\n- https://example.com\n"), "{out}");
    }

    #[test]
    fn assemble_project_template_keeps_sections() {
        let mut d = draft(TemplateKind::Project);
        d.tags.clear();
        d.body = "Ship it".into();
        let out = assemble(DEFAULT_PROJECT_TEMPLATE, &d);

        assert!(out.starts_with("---\ntitle: \"Test Note\"\ndate: 2026-02-13\ntags: [project]\nstatus: active\n"));
        assert!(out.contains("## Notes\n\nShip it\n\n## Related"));
        assert!(out.contains("- 2026-02-13 — Project created."));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn assemble_prepends_header_when_template_has_none() {
        let out = assemble("# {{title}}\n", &draft(TemplateKind::Basic));
        assert!(out.starts_with("---\ntitle: \"Test Note\""));
        assert!(out.ends_with("---\n# Test Note\n"));
    }

    #[test]
    fn fallback_basic_layout() {
        let mut d = draft(TemplateKind::Basic);
        d.body = "Some body".into();
        d.urls = vec!["https://example.com".into()];
        let out = fallback_assemble(&d);
        assert!(out.ends_with(
            "---\n\n# Test Note\n\n## Notes\n\nSome body\n\n## References\n\n- https://example.com\n"
        ));
    }

    #[test]
    fn fallback_project_layout() {
        let mut d = draft(TemplateKind::Project);
        d.body = "Reach 1.0".into();
        let out = fallback_assemble(&d);
        assert!(out.contains("tags: [go, testing, project]"));
        assert!(out.contains("status: active"));
        assert!(out.ends_with(
            "# Test Note\n\n## Goal\n\nReach 1.0\n\n## Tasks\n\n- [ ]\n\n## Notes\n\n\n## Related\n\n\n## Log\n\n- 2026-02-13 — Project created.\n"
        ));
    }

    #[test]
    fn read_template_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_template(dir.path(), TemplateKind::Basic).unwrap_err();
        assert!(matches!(err, NoteError::TemplateNotFound { ref name, .. } if name == "basic.md"));
    }

    #[test]
    fn build_note_content_falls_back_without_templates() {
        let dir = tempdir().unwrap();
        let mut d = draft(TemplateKind::Basic);
        d.title = "Fallback Test".into();
        let out = build_note_content(dir.path(), &d);
        assert!(out.contains("title: \"Fallback Test\""));
        assert!(out.contains("# Fallback Test"));
    }

    #[test]
    fn build_note_content_uses_template_when_present() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join(TEMPLATES_DIR)).unwrap();
        std::fs::write(
            template_path(dir.path(), TemplateKind::Basic),
            "---\n---\n# {{title}} from template\n",
        )
        .unwrap();

        let out = build_note_content(dir.path(), &draft(TemplateKind::Basic));
        assert!(out.contains("# Test Note from template"));
    }
}
