use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::env;

use crate::models::DEFAULT_MAX_TURNS;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub start_words_path: String,
    pub max_turns: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            start_words_path: env::var("START_WORDS_PATH")
                .unwrap_or_else(|_| "./start.txt".to_string()),
            max_turns: env::var("MAX_TURNS")
                .unwrap_or_else(|_| DEFAULT_MAX_TURNS.to_string())
                .parse()
                .context("MAX_TURNS must be a number")?,
        };
        ensure!(game.max_turns >= 1, "MAX_TURNS must be at least 1");

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
