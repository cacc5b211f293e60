mod config;
mod dictionary;
mod game;
mod models;
mod routes;
mod utils;
mod websocket;
mod words;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use config::Config;
use dictionary::Dictionary;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use words::{FileWordSource, WordSource};

/// Application state shared across all connections
pub struct AppState {
    pub config: Config,
    pub dictionary: Arc<Dictionary>,
    pub start_words: Arc<FileWordSource>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_scramble=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Word Scramble server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.dictionary_path).await {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {}. Every word will be rejected as not real.",
                e
            );
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            Dictionary::empty()
        }
    };

    // Start words are required; a game can't begin without them
    let start_words = FileWordSource::new(&config.game.start_words_path);
    let count = start_words
        .root_words()
        .context("start words are required to run the game")?
        .len();
    if count == 0 {
        tracing::warn!(
            "{} has no words, every round will use the fallback root word",
            start_words.path().display()
        );
    }

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        dictionary: Arc::new(dictionary),
        start_words: Arc::new(start_words),
    });

    let app = create_app(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with all routes and layers
fn create_app(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
