//! Command-line frontend for the note editor core.
//!
//! # Responsibility
//! - Create, list and show notes in the configured SQLite database.
//! - Run one editing session per `edit` call, printing notices and
//!   redirects to the terminal.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use notecard_core::config::{DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
use notecard_core::db::open_db;
use notecard_core::{
    sections, CoreConfig, EditorError, EditorSession, Navigator, NewNote, Note, NoteId,
    NoteStore, Notice, NoticeVariant, Notifier, Route, SqliteNoteStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notecard")]
#[command(about = "Edit notes stored in a local SQLite database", version)]
struct Cli {
    /// SQLite database file
    #[arg(long, env = DB_PATH_ENV)]
    db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = LOG_LEVEL_ENV)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = LOG_DIR_ENV)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a note
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long, default_value = "")]
        summary: String,

        #[arg(long)]
        reference: Option<String>,

        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// List notes, most recently updated first
    List,

    /// Print one note with its sections
    Show { id: String },

    /// Edit one note and save it
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        summary: Option<String>,

        #[arg(long)]
        reference: Option<String>,

        /// Tag to append (repeatable)
        #[arg(long = "add-tag")]
        add_tags: Vec<String>,

        /// Tag to remove (repeatable)
        #[arg(long = "remove-tag")]
        remove_tags: Vec<String>,
    },
}

/// Prints notices; destructive ones go to stderr.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn show(&mut self, notice: Notice) {
        match notice.variant {
            NoticeVariant::Default => println!("{}: {}", notice.title, notice.description),
            NoticeVariant::Destructive => {
                eprintln!("{}: {}", notice.title, notice.description)
            }
        }
    }
}

/// Reports redirects as the path the user would land on.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn go_to(&mut self, route: Route) {
        println!("-> {route}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    config
        .init_logging()
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")?;

    let mut conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    let mut store = SqliteNoteStore::try_new(&mut conn)?;

    match cli.command {
        Commands::Create {
            title,
            notes,
            summary,
            reference,
            tags,
        } => {
            let note = store.create_note(&NewNote {
                title,
                notes,
                summary,
                reference,
                tags,
            })?;
            info!("event=cli_create module=cli status=ok note_id={}", note.id);
            println!("{}", note.id);
        }
        Commands::List => {
            for note in store.list_notes()? {
                println!("{}\t{}\t{}", note.id, note.title, note.tags.join(","));
            }
        }
        Commands::Show { id } => {
            let Some(note) = store.get_note(&NoteId::new(id.as_str()))? else {
                bail!("note not found: {id}");
            };
            print_note(&note);
        }
        Commands::Edit {
            id,
            title,
            notes,
            summary,
            reference,
            add_tags,
            remove_tags,
        } => {
            let mut session =
                EditorSession::new(id, &mut store, TerminalNavigator, TerminalNotifier);
            session.load()?;

            let form = session.form_mut()?;
            if let Some(title) = title {
                form.set_title(title);
            }
            if let Some(notes) = notes {
                form.set_notes(notes);
            }
            if let Some(summary) = summary {
                form.set_summary(summary);
            }
            if let Some(reference) = reference {
                form.set_reference(reference);
            }
            for tag in &remove_tags {
                form.remove_tag(tag);
            }
            for tag in add_tags {
                form.set_tag_input(tag);
                form.add_pending_tag();
            }

            if !session.is_dirty() {
                println!("no changes");
                return Ok(());
            }
            match session.save() {
                Ok(note) => print_note(&note),
                Err(EditorError::Validation(reason)) => bail!("not saved: {reason}"),
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<CoreConfig> {
    let mut config = CoreConfig::from_env().map_err(anyhow::Error::msg)?;
    if let Some(db) = cli.db.clone() {
        config.db_path = db;
    }
    if let Some(level) = cli.log_level.as_deref() {
        config.set_log_level(level).map_err(anyhow::Error::msg)?;
    }
    if let Some(dir) = cli.log_dir.clone() {
        config.log_dir = Some(dir);
    }
    Ok(config)
}

fn print_note(note: &Note) {
    println!("# {}", note.title);
    println!("id: {}", note.id);
    if let Some(reference) = note.reference.as_deref().filter(|r| !r.is_empty()) {
        println!("reference: {reference}");
    }
    if !note.tags.is_empty() {
        println!("tags: {}", note.tags.join(", "));
    }
    if !note.summary.is_empty() {
        println!("summary: {}", note.summary);
    }
    for section in sections(&note.notes) {
        match section.heading.as_deref() {
            Some(heading) => println!("\n[{heading}]"),
            None => println!(),
        }
        if !section.content.is_empty() {
            println!("{}", section.content);
        }
    }
}
