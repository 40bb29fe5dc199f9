//! # Event Router
//!
//! Maps inbound domain events (start command, `/next`, button presses) to
//! the hand-off protocol. Holds the read-only dependencies; each dispatch
//! runs to completion before the loop takes the next event.

use anyhow::Result;

use crate::application::handoff;
use crate::domain::config::Config;
use crate::domain::traits::{ChatSink, CrmApi};
use crate::domain::types::Event;
use crate::strings::messages;

pub struct EventRouter<A, C> {
    api: A,
    chat: C,
    manager_id: String,
}

impl<A, C> EventRouter<A, C>
where
    A: CrmApi,
    C: ChatSink,
{
    pub fn new(api: A, chat: C, config: &Config) -> Self {
        Self {
            api,
            chat,
            manager_id: config.manager_id.clone(),
        }
    }

    pub async fn dispatch(&self, event: Event) -> Result<()> {
        tracing::info!("Dispatching {event:?}");
        match event {
            Event::Start { chat_id } => {
                self.chat.send_message(chat_id, messages::GREETING).await?;
            }
            Event::Next { chat_id } => {
                handoff::claim_next(&self.api, &self.chat, &self.manager_id, chat_id).await?;
            }
            Event::Action(callback) => {
                handoff::resolve(&self.api, &self.chat, &self.manager_id, &callback).await?;
            }
        }
        Ok(())
    }
}
