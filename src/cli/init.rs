//! CLI `init` command — set up the folder layout and default templates.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::notes::layout;

pub fn init(out: &mut impl Write, root: &Path) -> Result<()> {
    let report = layout::init_layout(root)?;

    if report.is_noop() {
        writeln!(out, "Notes directory already set up at {}", root.display())?;
        return Ok(());
    }
    for dir in &report.created_dirs {
        writeln!(out, "Created directory: {}", dir.display())?;
    }
    for template in &report.written_templates {
        writeln!(out, "Wrote template:    {}", template.display())?;
    }
    Ok(())
}
