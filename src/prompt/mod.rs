//! Interactive question-and-answer input.
//!
//! Provides the [`Prompter`] trait, a line-oriented implementation over any reader and
//! writer ([`LinePrompter`]), and a scripted double for tests ([`ScriptedPrompter`]).
//! Implementors supply two primitives; the four question shapes the creation flow
//! needs are provided on top of them.

pub mod line;
pub mod scripted;

pub use line::LinePrompter;
pub use scripted::ScriptedPrompter;

use anyhow::Result;

use crate::error::NoteError;

/// Source of answers for the creation flow.
pub trait Prompter {
    /// Show `prompt` and read one answer, trimmed. `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Show an informational message to the user.
    fn notify(&mut self, message: &str) -> Result<()>;

    /// Ask for a line; exhausted input counts as an empty answer.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        Ok(self.read_line(prompt)?.unwrap_or_default())
    }

    /// Ask until the answer is non-empty.
    ///
    /// Fails with [`NoteError::InputClosed`] if input runs out first.
    fn ask_required(&mut self, prompt: &str) -> Result<String> {
        loop {
            match self.read_line(prompt)? {
                Some(answer) if !answer.is_empty() => return Ok(answer),
                Some(_) => self.notify("This field is required.")?,
                None => {
                    return Err(NoteError::InputClosed {
                        prompt: prompt.trim().to_string(),
                    }
                    .into())
                }
            }
        }
    }

    /// Show a numbered menu and return the 0-based index of the chosen option.
    ///
    /// An empty answer picks `default`; anything that is not a listed number picks
    /// `default` after a notice.
    fn choose(&mut self, prompt: &str, options: &[&str], default: usize) -> Result<usize> {
        let answer = self.ask(&menu_prompt(prompt, options, default))?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<usize>() {
            Ok(choice) if (1..=options.len()).contains(&choice) => Ok(choice - 1),
            _ => {
                let fallback = options.get(default).copied().unwrap_or_default();
                self.notify(&format!("Invalid choice, using default: {fallback}"))?;
                Ok(default)
            }
        }
    }

    /// Ask a yes/no question; anything but `y`/`yes` means no.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(&format!("{prompt} (y/n): "))?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// `Folder: 1) Inbox  2) Projects  [1]: `
fn menu_prompt(prompt: &str, options: &[&str], default: usize) -> String {
    let mut out = prompt.to_string();
    for (i, option) in options.iter().enumerate() {
        out.push_str(&format!(" {}) {} ", i + 1, option));
    }
    out.push_str(&format!("[{}]: ", default + 1));
    out
}
