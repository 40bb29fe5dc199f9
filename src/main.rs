//! # Main Entry Point
//!
//! Loads configuration, sets up logging, resets the Telegram webhook, and
//! runs the single-consumer polling loop: each update is routed and handled
//! to completion before the next one is taken.

use std::time::Duration;

use anyhow::{Context, Result};

use biginvest_bot::application::router::EventRouter;
use biginvest_bot::domain::config::Config;
use biginvest_bot::infrastructure::crm::CrmClient;
use biginvest_bot::infrastructure::telegram::{self, TelegramClient};

/// Long-poll timeout for getUpdates, in seconds.
const POLL_TIMEOUT: u64 = 30;

/// Back-off after a failed poll before trying again.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Missing BOT_TOKEN aborts here, before any event is served.
    let config = Config::from_env().context("Failed to load configuration")?;

    let telegram = TelegramClient::new(&config.bot_token);
    let crm = CrmClient::new(&config);

    telegram
        .delete_webhook(true)
        .await
        .context("Failed to reset webhook")?;

    tracing::info!(
        "BIG Invest CRM bot started (api={}, manager={})",
        config.api_base,
        config.manager_id
    );

    let router = EventRouter::new(crm, telegram.clone(), &config);

    let mut offset: Option<i64> = None;
    loop {
        let updates = match telegram.get_updates(offset, POLL_TIMEOUT).await {
            Ok(updates) => updates,
            Err(e) => {
                tracing::warn!("Polling failed: {e:#}");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = Some(update.update_id + 1);
            let Some(event) = telegram::event_from_update(update) else {
                continue;
            };
            if let Err(e) = router.dispatch(event).await {
                tracing::warn!("Handler failed: {e:#}");
            }
        }
    }
}
