//! Command-line interface for the hangman server.

use clap::{Parser, Subcommand};

/// Hangman - word guessing game server
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Word guessing game server with per-player sessions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to a TOML config file (defaults to hangman.toml if present)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Word list, one word per line
        #[arg(long)]
        vocabulary: Option<std::path::PathBuf>,
    },

    /// Report how many words of a word list are playable
    Vocabulary {
        /// Word list, one word per line
        #[arg(long, default_value = "data/words.txt")]
        vocabulary: std::path::PathBuf,

        /// Characters accepted as guesses
        #[arg(long, default_value = "abcdefghijklmnopqrstuvwxyz")]
        alphabet: String,
    },
}
