//! CLI `list` command — most recently modified notes first.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::notes::{list, scan};

/// Print recent notes to `out`, or all of them with `show_all`.
pub fn list(out: &mut impl Write, root: &Path, show_all: bool, limit: usize, json: bool) -> Result<()> {
    let notes = scan::scan(root)?;
    let listing = list::list(notes, show_all, limit);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&listing.notes)?)?;
        return Ok(());
    }

    if listing.total == 0 {
        writeln!(out, "No notes found.")?;
        return Ok(());
    }

    for line in listing.lines() {
        writeln!(out, "{line}")?;
    }
    if let Some(footer) = listing.footer() {
        writeln!(out)?;
        writeln!(out, "{footer}")?;
    }
    Ok(())
}
