//! Hangman - unified CLI
//!
//! Runs the game server or inspects a word list.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hangman::{Alphabet, Vocabulary};
use hangman_server::{AppState, ServerConfig, SessionRegistry, router, spawn_eviction};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Config file picked up when `--config` is not given.
const DEFAULT_CONFIG: &str = "hangman.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            vocabulary,
        } => {
            let config = load_config(config.as_deref())?.with_overrides(host, port, vocabulary);
            run_server(config).await
        }
        Command::Vocabulary {
            vocabulary,
            alphabet,
        } => report_vocabulary(&vocabulary, &alphabet),
    }
}

/// Run the HTTP game server
#[instrument(skip_all, fields(host = %config.host(), port = config.port()))]
async fn run_server(config: ServerConfig) -> Result<()> {
    info!("Starting hangman server");

    let vocabulary = Vocabulary::from_file(config.vocabulary_path(), config.guess_alphabet())?;
    let registry = SessionRegistry::new(vocabulary).context("Vocabulary has no playable words")?;

    let _sweeper = spawn_eviction(
        registry.clone(),
        config.eviction_interval(),
        config.session_idle(),
    );

    let app = router(AppState::new(registry, config.cookie_name()));

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app).await?;

    Ok(())
}

/// Print word list statistics
#[instrument]
fn report_vocabulary(path: &Path, alphabet: &str) -> Result<()> {
    let vocabulary = Vocabulary::from_file(path, Alphabet::from(alphabet))?;
    let eligible = vocabulary.eligible_len();

    println!("{}", path.display());
    println!("  words spelled from alphabet: {}", vocabulary.len());
    println!("  playable within {} misses: {}", hangman::MAX_GUESSES, eligible);

    vocabulary.ensure_playable()?;
    Ok(())
}

#[instrument]
fn load_config(path: Option<&Path>) -> Result<ServerConfig> {
    info!("Loading server configuration");

    let path = path.map(Path::to_path_buf).or_else(|| {
        let fallback = PathBuf::from(DEFAULT_CONFIG);
        fallback.exists().then_some(fallback)
    });

    match path {
        Some(path) => Ok(ServerConfig::from_file(&path)?),
        None => {
            info!("No config file found, using defaults");
            Ok(ServerConfig::default())
        }
    }
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hangman=debug,hangman_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
