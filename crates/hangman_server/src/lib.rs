//! Hangman server library.
//!
//! Serves the hangman game over a small JSON REST API, one session per
//! player.
//!
//! # Architecture
//!
//! - **Registry**: player id to session, created on first contact
//! - **Server**: axum routes and the player-id cookie middleware
//! - **Config**: TOML server configuration
//!
//! # Example
//!
//! ```no_run
//! use hangman::{Alphabet, Vocabulary};
//! use hangman_server::{AppState, SessionRegistry, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let vocabulary = Vocabulary::new(["quick", "brown", "fox"], Alphabet::default());
//! let registry = SessionRegistry::new(vocabulary)?;
//! let app = router(AppState::new(registry, "hangman_player"));
//!
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 3000)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod registry;
mod server;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Session management
pub use registry::{PlayerId, RegistryError, SessionHandle, SessionRegistry};

// Crate-level exports - HTTP
pub use server::{ApiError, AppState, Player, router, spawn_eviction};
