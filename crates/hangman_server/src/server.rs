//! HTTP routes for playing hangman.

use crate::registry::{RegistryError, SessionRegistry};
use axum::extract::{Extension, Path, Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use hangman::{GameStateView, GuessError};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Longest player id accepted from a cookie.
const MAX_PLAYER_ID_LEN: usize = 64;

/// Identity of the player making the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player(pub String);

/// Shared state handed to every route.
#[derive(Debug, Clone)]
pub struct AppState {
    registry: SessionRegistry,
    cookie_name: Arc<str>,
}

impl AppState {
    /// Creates the shared state.
    #[instrument(skip(registry))]
    pub fn new(registry: SessionRegistry, cookie_name: &str) -> Self {
        Self {
            registry,
            cookie_name: Arc::from(cookie_name),
        }
    }
}

/// Builds the API router.
///
/// - `GET /game` returns the current state
/// - `POST /game/new` starts a new round
/// - `POST /guess/{letter}` guesses a letter
/// - `GET /health` reports liveness
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/game", get(get_game))
        .route("/game/new", post(new_game))
        .route("/guess/{letter}", post(guess))
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(state.clone(), identify_player))
        .with_state(state)
}

/// Spawns the task that periodically drops idle sessions.
#[instrument(skip(registry))]
pub fn spawn_eviction(
    registry: SessionRegistry,
    every: Duration,
    max_idle: Duration,
) -> tokio::task::JoinHandle<()> {
    info!("Starting idle session sweeper");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let evicted = registry.evict_idle(max_idle);
            debug!(evicted, remaining = registry.len(), "Idle sweep done");
        }
    })
}

/// Error returned by a route.
#[derive(Debug, derive_more::From)]
pub enum ApiError {
    /// A rejected guess; the player's fault.
    Guess(GuessError),
    /// No round could be started; the server's fault.
    Round(RegistryError),
}

#[derive(Debug, Serialize)]
struct Rejection {
    message: String,
    #[serde(flatten)]
    state: GameStateView,
}

#[derive(Debug, Serialize)]
struct Failure {
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Guess(err) => {
                let message = err.to_string();
                let (_, state) = err.into_parts();
                (StatusCode::BAD_REQUEST, Json(Rejection { message, state })).into_response()
            }
            ApiError::Round(err) => {
                error!(error = %err, "Unable to start a round");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Failure {
                        message: "Unable to start a new game",
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[instrument(skip(state, player), fields(player_id = %player.0))]
async fn get_game(
    State(state): State<AppState>,
    Extension(player): Extension<Player>,
) -> Json<GameStateView> {
    Json(state.registry.state(&player.0))
}

#[instrument(skip(state, player), fields(player_id = %player.0))]
async fn new_game(
    State(state): State<AppState>,
    Extension(player): Extension<Player>,
) -> Result<Json<GameStateView>, ApiError> {
    let registry = &state.registry;
    let view = registry.new_round(&player.0, registry.vocabulary())?;
    info!(won = view.won, lost = view.lost, "New game started");
    Ok(Json(view))
}

#[instrument(skip(state, player), fields(player_id = %player.0))]
async fn guess(
    State(state): State<AppState>,
    Extension(player): Extension<Player>,
    Path(letter): Path<String>,
) -> Result<Json<GameStateView>, ApiError> {
    let view = state.registry.guess(&player.0, &letter).map_err(|e| {
        debug!(error = %e, "Guess rejected");
        e
    })?;
    Ok(Json(view))
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    sessions: usize,
}

async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        sessions: state.registry.len(),
    })
}

/// Reads the player id cookie, minting a new id when it is missing.
async fn identify_player(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let (player_id, minted) = match cookie_value(req.headers(), &state.cookie_name) {
        Some(id) => (id, false),
        None => (uuid::Uuid::new_v4().to_string(), true),
    };
    debug!(player_id = %player_id, minted, uri = %req.uri(), "Identified player");
    req.extensions_mut().insert(Player(player_id.clone()));

    let mut response = next.run(req).await;

    if minted {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            state.cookie_name, player_id
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "Could not encode player cookie"),
        }
    }
    response
}

/// Finds a well-formed player id in the `Cookie` headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| is_player_id(value))
        .map(str::to_string)
}

fn is_player_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_PLAYER_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
