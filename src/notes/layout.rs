//! On-disk layout of a notes root: the PARA folders plus `_templates`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::template::{template_path, DEFAULT_BASIC_TEMPLATE, DEFAULT_PROJECT_TEMPLATE, TEMPLATES_DIR};
use super::types::{Folder, TemplateKind};

/// What [`init_layout`] had to create.
#[derive(Debug, Default)]
pub struct InitReport {
    pub created_dirs: Vec<PathBuf>,
    pub written_templates: Vec<PathBuf>,
}

impl InitReport {
    pub fn is_noop(&self) -> bool {
        self.created_dirs.is_empty() && self.written_templates.is_empty()
    }
}

/// Create the root, every folder, and the default templates, leaving anything that
/// already exists untouched.
pub fn init_layout(root: &Path) -> Result<InitReport> {
    let mut report = InitReport::default();

    let dirs = std::iter::once(root.to_path_buf())
        .chain(Folder::ALL.iter().map(|f| root.join(f.as_str())))
        .chain(std::iter::once(root.join(TEMPLATES_DIR)));
    for dir in dirs {
        if !dir.is_dir() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create directory {}", dir.display()))?;
            report.created_dirs.push(dir);
        }
    }

    for (kind, contents) in [
        (TemplateKind::Basic, DEFAULT_BASIC_TEMPLATE),
        (TemplateKind::Project, DEFAULT_PROJECT_TEMPLATE),
    ] {
        let path = template_path(root, kind);
        if !path.exists() {
            std::fs::write(&path, contents)
                .with_context(|| format!("failed to write template {}", path.display()))?;
            report.written_templates.push(path);
        }
    }

    tracing::info!(
        root = %root.display(),
        dirs = report.created_dirs.len(),
        templates = report.written_templates.len(),
        "layout initialized"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_creates_everything_once() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("notes");

        let first = init_layout(&root).unwrap();
        assert_eq!(first.created_dirs.len(), 7);
        assert_eq!(first.written_templates.len(), 2);
        for folder in Folder::ALL {
            assert!(root.join(folder.as_str()).is_dir());
        }

        let second = init_layout(&root).unwrap();
        assert!(second.is_noop());
    }

    #[test]
    fn init_keeps_existing_templates() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir(root.join(TEMPLATES_DIR)).unwrap();
        std::fs::write(template_path(root, TemplateKind::Basic), "custom").unwrap();

        let report = init_layout(root).unwrap();
        assert_eq!(report.written_templates, vec![template_path(root, TemplateKind::Project)]);
        assert_eq!(
            std::fs::read_to_string(template_path(root, TemplateKind::Basic)).unwrap(),
            "custom"
        );
    }
}
