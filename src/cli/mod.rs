//! Command glue: each subcommand resolves what it needs from [`QnConfig`](crate::config::QnConfig),
//! calls into [`notes`](crate::notes), and prints the result.

pub mod create;
pub mod find;
pub mod init;
pub mod list;
