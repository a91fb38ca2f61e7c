// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use infrastructure::{Config, SqliteNoteRepository};
use ports::AppState;
use tracing::{debug, info};
use crate::cli::args::{Args, Command};
use crate::constants::{DATABASE_FILE_NAME, DATA_DIR_NAME};
use crate::domain::NoteId;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting quirknotes with arguments");

    let config = match &args.config {
        Some(path) => {
            debug!(?path, "Loading config file");
            Config::load(path)?
        }
        None => Config::default(),
    };

    // Initialize infrastructure
    let database = resolve_database_path(args.database.as_deref(), &config)?;
    let repository = SqliteNoteRepository::new(&database)?;

    match args.command {
        Command::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            info!(?database, "Serving notes");
            let router = ports::create_router(
                AppState::new(repository),
                &config.server.cors_allowed_origins,
            );
            ports::serve(router, &host, port).await
        }
        Command::List => handle_list_command(repository),
        Command::View { note_id, json } => handle_view_command(repository, note_id, json),
        Command::Delete { note_id } => handle_delete_command(repository, note_id),
    }
}

/// Pick the database: CLI flag, then config file, then the per-user data directory
pub fn resolve_database_path(cli_path: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        debug!(?path, "Using provided database path");
        return Ok(path.to_path_buf());
    }

    if !config.storage.database.is_empty() {
        debug!(path = %config.storage.database, "Using database path from config");
        return Ok(PathBuf::from(&config.storage.database));
    }

    let data_dir = dirs::data_dir().context("Could not find data directory")?;
    Ok(data_dir.join(DATA_DIR_NAME).join(DATABASE_FILE_NAME))
}

fn handle_list_command(repository: SqliteNoteRepository) -> Result<()> {
    let mut lister = application::NoteLister::new(repository);
    let notes = lister.list_notes()?;

    for note in &notes {
        println!("{}\t{}", note.id, note.title);
    }
    debug!(count = notes.len(), "Listed notes");
    Ok(())
}

fn handle_view_command(repository: SqliteNoteRepository, note_id: String, json: bool) -> Result<()> {
    let mut viewer = application::NoteViewer::new(repository);
    let note = viewer.view_note(&NoteId::from(note_id))?;

    if json {
        let output = serde_json::to_string_pretty(&note)
            .context("Failed to serialize note to JSON")?;
        println!("{}", output);
    } else {
        println!("ID:      {}", note.id);
        println!("Title:   {}", note.title);
        if let Some(color) = &note.color {
            println!("Color:   {}", color);
        }
        println!();
        println!("{}", note.content);
    }
    Ok(())
}

fn handle_delete_command(repository: SqliteNoteRepository, note_id: String) -> Result<()> {
    let note_id = NoteId::from(note_id);
    let mut deleter = application::NoteDeleter::new(repository);
    deleter.delete_note(&note_id)?;

    info!(%note_id, "Deleted note");
    println!("Deleted note {}", note_id);
    Ok(())
}
