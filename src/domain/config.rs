//! # Configuration
//!
//! Immutable runtime configuration, loaded once from the environment at
//! startup and passed by reference into the clients and the router.

use std::env;

use thiserror::Error;

/// Production CRM endpoint, used when `API_BASE` is not set.
const DEFAULT_API_BASE: &str = "https://biginvest-api-production.up.railway.app";

#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot credential token.
    pub bot_token: String,
    /// Base URL of the CRM application-tracking API.
    pub api_base: String,
    /// Bearer token for the CRM API.
    pub api_token: String,
    /// Identity the bot writes into every status update.
    pub manager_id: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN is not set")]
    MissingBotToken,
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present).
    ///
    /// A missing `BOT_TOKEN` is fatal; everything else falls back to a
    /// documented default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bot_token = env::var("BOT_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingBotToken)?;

        let api_base = env::var("API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_token = env::var("API_TOKEN").unwrap_or_else(|_| "dev-token".to_string());
        let manager_id = env::var("MANAGER_ID").unwrap_or_else(|_| "mgr-001".to_string());

        Ok(Self {
            bot_token,
            api_base,
            api_token,
            manager_id,
        })
    }
}
