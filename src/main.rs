use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;

use quicknote::cli;
use quicknote::config::QnConfig;
use quicknote::prompt::LinePrompter;

#[derive(Parser)]
#[command(
    name = "qn",
    version,
    about = "Quick Markdown notes for a PARA-organized folder",
    after_help = "Environment:\n  MDNOTES_DIR     Path to the notes directory (required)\n  EDITOR          Editor to open notes in (optional)\n  QN_LOG_LEVEL    Log filter, e.g. debug (optional)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new note interactively (the default)
    Create,
    /// List the most recently modified notes
    List {
        /// Show every note instead of the most recent ones
        #[arg(long)]
        all: bool,
        /// Print notes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search notes by title, tags, aliases, and body
    Find {
        /// Words to search for (joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,
        /// Print hits as JSON; no matches prints an empty array instead of a message
        #[arg(long)]
        json: bool,
    },
    /// Create the folder layout and default templates
    Init,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = QnConfig::load()?;

    // Log to stderr so stdout stays clean for listings and JSON.
    let filter =
        EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Command::Create) {
        Command::Create => {
            let root = config.resolve_notes_root()?;
            let mut prompter = LinePrompter::new(io::stdin().lock(), io::stderr());
            let today = chrono::Local::now().date_naive();
            cli::create::create(&mut prompter, &root, today, config.editor_command())?;
        }
        Command::List { all, json } => {
            let root = config.resolve_notes_root()?;
            cli::list::list(&mut stdout, &root, all, config.list.limit, json)?;
        }
        Command::Find { query, json } => {
            let root = config.resolve_notes_root()?;
            cli::find::find(&mut stdout, &root, &query.join(" "), json)?;
        }
        Command::Init => {
            let root = config.notes_root()?;
            cli::init::init(&mut stdout, &root)?;
        }
    }

    Ok(())
}
