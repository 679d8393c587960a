//! External editor launch.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Build the command for `editor` (split on whitespace, so `"code --wait"` works) with
/// `path` appended as the last argument.
pub fn editor_command(editor: &str, path: &Path) -> Result<Command> {
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("editor command is empty");
    };
    let mut cmd = Command::new(program);
    cmd.args(parts).arg(path);
    Ok(cmd)
}

/// Open `path` in `editor` and wait for it to exit, inheriting the terminal.
pub fn open_in_editor(editor: &str, path: &Path) -> Result<()> {
    let mut cmd = editor_command(editor, path)?;
    tracing::debug!(editor, path = %path.display(), "launching editor");

    let status = cmd
        .status()
        .with_context(|| format!("failed to launch editor `{editor}`"))?;
    if !status.success() {
        bail!("editor `{editor}` exited with {status}");
    }
    Ok(())
}
