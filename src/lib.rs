//! Quick Markdown notes for a PARA-organized folder.
//!
//! `qn` creates, lists, and searches Markdown notes kept under a notes root with a fixed
//! folder taxonomy:
//!
//! | Folder | Purpose | Filename |
//! |--------|---------|----------|
//! | **Inbox** | Unsorted captures | `YYYY-MM-DD-<slug>.md` |
//! | **Projects** | Efforts with a goal (project template) | `YYYY-MM-DD-<slug>.md` |
//! | **Areas** | Ongoing responsibilities | `<slug>.md` |
//! | **Resources** | Reference material, with URLs | `<slug>.md` |
//! | **Archive** | Inactive notes (listed and searched only) | `<slug>.md` |
//!
//! Each note starts with a small header block:
//!
//! ```text
//! ---
//! title: "Golang Tips"
//! date: 2026-02-13
//! tags: [go, programming]
//! status: active
//! aliases: [go-tips]
//! ---
//! ```
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from a TOML file and environment variables
//! - [`notes`] — Note model: slugs, header codec, scanning, templates, listing, search
//! - [`prompt`] — Interactive question/answer input used by note creation
//! - [`editor`] — Launching an external editor on a new note
//! - [`cli`] — Command glue behind the `qn` binary

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod notes;
pub mod prompt;

pub use error::NoteError;
