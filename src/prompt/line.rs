use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::Prompter;

/// Prompts on a writer and reads answers line by line from a reader.
///
/// The binary wires this to stdin and stderr, keeping stdout for command output.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter and hand back the writer (tests inspect what was shown).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}").context("failed to write prompt")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}").context("failed to write message")?;
        Ok(())
    }
}
