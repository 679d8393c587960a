#![allow(dead_code)]

use quicknote::notes::layout::init_layout;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Fresh notes root with every folder and the default templates.
pub fn notes_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    init_layout(dir.path()).unwrap();
    dir
}

/// Fresh notes root with the folders but no `_templates` directory.
pub fn notes_root_without_templates() -> TempDir {
    let dir = notes_root();
    std::fs::remove_dir_all(dir.path().join("_templates")).unwrap();
    dir
}

/// Write a note file and backdate its modification time by `minutes_ago`.
pub fn write_note(root: &Path, folder: &str, name: &str, content: &str, minutes_ago: u64) -> PathBuf {
    let path = root.join(folder).join(name);
    std::fs::write(&path, content).unwrap();
    let mtime = SystemTime::now() - Duration::from_secs(minutes_ago * 60);
    File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(mtime)
        .unwrap();
    path
}

/// Header block plus body, in the format the tool writes.
pub fn note_text(title: &str, date: &str, tags: &[&str], aliases: &[&str], body: &str) -> String {
    format!(
        "---\ntitle: \"{title}\"\ndate: {date}\ntags: [{}]\nstatus: draft\naliases: [{}]\n---\n{body}",
        tags.join(", "),
        aliases.join(", ")
    )
}

/// Single file in `folder`, panicking if there is not exactly one.
pub fn only_file(root: &Path, folder: &str) -> PathBuf {
    let entries: Vec<PathBuf> = std::fs::read_dir(root.join(folder))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1, "expected one file in {folder}: {entries:?}");
    entries.into_iter().next().unwrap()
}

/// Run a CLI command that writes to a buffer and return what it printed.
pub fn capture(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}
