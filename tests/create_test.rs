mod helpers;

use chrono::NaiveDate;
use helpers::{notes_root, notes_root_without_templates, only_file};
use quicknote::cli::create::create;
use quicknote::notes::frontmatter::decode;
use quicknote::prompt::{LinePrompter, ScriptedPrompter};
use std::io::Cursor;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()
}

#[test]
fn create_inbox_note() {
    let root = notes_root();
    let mut p = ScriptedPrompter::new(["Test Note", "1", "go, testing", "A test note"]);

    let created = create(&mut p, root.path(), today(), None).unwrap();

    let path = only_file(root.path(), "Inbox");
    assert_eq!(created.path, path);
    assert!(path.ends_with("2026-02-13-test-note.md"));
    assert!(!created.replaced_existing);

    let content = std::fs::read_to_string(&path).unwrap();
    let decoded = decode(&content);
    assert_eq!(decoded.frontmatter.title, "Test Note");
    assert_eq!(decoded.frontmatter.date, "2026-02-13");
    assert_eq!(decoded.frontmatter.tags, vec!["go", "testing"]);
    assert_eq!(decoded.frontmatter.status, "draft");
    assert!(content.contains("## Notes\n\nA test note\n\n## References"));
    assert!(p.notices().iter().any(|n| n.starts_with("Created: ")));
}

#[test]
fn create_project_without_tags_is_tagged_and_active() {
    let root = notes_root();
    let mut p = ScriptedPrompter::new(["My Project", "2", "", ""]);

    create(&mut p, root.path(), today(), None).unwrap();

    let path = only_file(root.path(), "Projects");
    assert!(path.ends_with("2026-02-13-my-project.md"));
    let content = std::fs::read_to_string(&path).unwrap();
    let fm = decode(&content).frontmatter;
    assert_eq!(fm.tags, vec!["project"]);
    assert_eq!(fm.status, "active");
    assert!(content.contains("## Goal"));
    assert!(content.contains("- 2026-02-13 — Project created."));
}

#[test]
fn create_resource_with_urls() {
    let root = notes_root();
    let mut p = ScriptedPrompter::new([
        "API Reference",
        "4",
        "api, reference",
        "Useful API docs",
        "https://example.com/api",
    ]);

    create(&mut p, root.path(), today(), None).unwrap();

    let path = only_file(root.path(), "Resources");
    assert!(path.ends_with("api-reference.md"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("## References\n- https://example.com/api\n"));
}

#[test]
fn create_without_templates_uses_built_in_layout() {
    let root = notes_root_without_templates();
    let mut p = ScriptedPrompter::new(["Fallback Test", "3", "test", "Some body"]);

    create(&mut p, root.path(), today(), None).unwrap();

    let path = only_file(root.path(), "Areas");
    assert!(path.ends_with("fallback-test.md"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("title: \"Fallback Test\""));
    assert!(content.contains("# Fallback Test\n\n## Notes\n\nSome body\n"));
}

#[test]
fn existing_file_is_overwritten_with_warning() {
    let root = notes_root();
    let existing = root.path().join("Areas").join("health.md");
    std::fs::write(&existing, "old content").unwrap();

    let mut p = ScriptedPrompter::new(["Health", "3", "", ""]);
    let created = create(&mut p, root.path(), today(), None).unwrap();

    assert!(created.replaced_existing);
    assert_eq!(created.path, existing);
    assert!(!std::fs::read_to_string(&existing).unwrap().contains("old content"));
    assert!(p
        .notices()
        .iter()
        .any(|n| n.starts_with("Warning: file already exists:")));
}

#[test]
fn overwrite_warning_comes_before_a_failed_write() {
    let root = notes_root();
    // A directory at the destination makes the final rename fail.
    let blocked = root.path().join("Areas").join("health.md");
    std::fs::create_dir(&blocked).unwrap();
    std::fs::write(blocked.join("keep.txt"), "x").unwrap();

    let mut p = ScriptedPrompter::new(["Health", "3", "", ""]);
    assert!(create(&mut p, root.path(), today(), None).is_err());

    assert_eq!(
        p.notices(),
        [format!("Warning: file already exists: {}", blocked.display())]
    );
}

#[test]
fn missing_folder_is_created() {
    let root = notes_root();
    std::fs::remove_dir(root.path().join("Inbox")).unwrap();

    let mut p = ScriptedPrompter::new(["Fresh", "", "", ""]);
    create(&mut p, root.path(), today(), None).unwrap();

    only_file(root.path(), "Inbox");
}

#[test]
fn editor_is_offered_only_when_configured() {
    let root = notes_root();
    let mut p = ScriptedPrompter::new(["No Editor", "1", "", ""]);
    create(&mut p, root.path(), today(), None).unwrap();
    assert!(!p.prompts().iter().any(|q| q.contains("Open in editor?")));
}

#[test]
fn editor_failure_does_not_fail_creation() {
    let root = notes_root();
    let mut p = ScriptedPrompter::new(["Edit Me", "1", "", "", "y"]);

    let created = create(
        &mut p,
        root.path(),
        today(),
        Some("qn-test-editor-that-does-not-exist"),
    )
    .unwrap();

    assert!(created.path.exists());
    assert_eq!(p.remaining(), 0);
    assert!(p.notices().iter().any(|n| n.starts_with("Error opening editor:")));
}

#[test]
fn declining_the_editor_skips_launch() {
    let root = notes_root();
    let mut p = ScriptedPrompter::new(["Edit Me", "1", "", "", "n"]);

    create(
        &mut p,
        root.path(),
        today(),
        Some("qn-test-editor-that-does-not-exist"),
    )
    .unwrap();

    assert!(!p.notices().iter().any(|n| n.starts_with("Error opening editor:")));
}

#[test]
fn create_through_line_prompter() {
    let root = notes_root();
    let input = Cursor::new("\nLine Note\n9\nRust, CLI\n\n");
    let mut p = LinePrompter::new(input, Vec::new());

    create(&mut p, root.path(), today(), None).unwrap();

    let shown = String::from_utf8(p.into_writer()).unwrap();
    assert!(shown.contains("This field is required."));
    assert!(shown.contains("Invalid choice, using default: Inbox"));
    assert!(shown.contains("Created: "));

    let path = only_file(root.path(), "Inbox");
    let fm = decode(&std::fs::read_to_string(path).unwrap()).frontmatter;
    assert_eq!(fm.title, "Line Note");
    assert_eq!(fm.tags, vec!["rust", "cli"]);
}

#[test]
fn closed_input_aborts_before_writing() {
    let root = notes_root();
    let mut p = ScriptedPrompter::new(Vec::<String>::new());

    assert!(create(&mut p, root.path(), today(), None).is_err());
    for folder in ["Inbox", "Projects", "Areas", "Resources"] {
        assert_eq!(std::fs::read_dir(root.path().join(folder)).unwrap().count(), 0);
    }
}
