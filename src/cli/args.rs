// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Path to notes database, `:memory:` for a transient store (optional)
    #[arg(short, long, value_name = "DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (serve, list, view, or delete)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the notes HTTP service
    Serve {
        /// Address to bind (overrides config)
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,
    },

    /// List notes with ID and title
    List,

    /// Print a single note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note from the store
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },
}
