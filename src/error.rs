//! Typed failure conditions of the note core.
//!
//! Soft conditions (missing header block, unreadable note during a scan) never
//! surface here; they are handled where they occur. What remains are the hard
//! failures a caller has to report, plus the template lookup failure that the
//! creation flow catches and turns into the built-in fallback.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoteError {
    /// No notes root was configured (neither `MDNOTES_DIR` nor `notes.root`).
    #[error("notes directory is not configured: set MDNOTES_DIR or `root` under [notes] in the config file")]
    NotesRootUnset,

    #[error("notes directory {} is not a directory", path.display())]
    NotesRootNotDirectory { path: PathBuf },

    #[error("notes directory {}: {source}", path.display())]
    NotesRootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A PARA folder exists but could not be listed.
    #[error("reading {}: {source}", path.display())]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("search query is required")]
    EmptyQuery,

    #[error("template {name} not found at {}", path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    #[error("reading template {name}: {source}")]
    TemplateUnreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Input ended while a required answer was still outstanding.
    #[error("input closed before answering {prompt:?}")]
    InputClosed { prompt: String },
}
