//! # Telegram Service Adapter
//!
//! Minimal Telegram Bot API client over `reqwest`, covering exactly what the
//! bot needs: webhook reset, `getUpdates` long polling, sending messages
//! with inline keyboards, editing reply markup, and answering callback
//! queries. Implements the `ChatSink` trait and translates raw updates into
//! domain events.

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::domain::traits::ChatSink;
use crate::domain::types::{ActionButton, CallbackEvent, Event};

#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    base: String,
}

/// Standard Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<IncomingMessage>,
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub data: Option<String>,
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Serialize)]
struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
struct EditReplyMarkupRequest {
    chat_id: i64,
    message_id: i64,
}

#[derive(Debug, Serialize)]
struct AnswerCallbackRequest<'a> {
    callback_query_id: &'a str,
    text: &'a str,
    show_alert: bool,
}

#[derive(Debug, Serialize)]
struct DeleteWebhookRequest {
    drop_pending_updates: bool,
}

#[derive(Debug, Serialize)]
struct InlineKeyboardMarkup {
    inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Serialize)]
struct InlineKeyboardButton {
    text: String,
    callback_data: String,
}

impl InlineKeyboardMarkup {
    fn from_buttons(keyboard: &[Vec<ActionButton>]) -> Self {
        Self {
            inline_keyboard: keyboard
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|b| InlineKeyboardButton {
                            text: b.label.clone(),
                            callback_data: b.token.clone(),
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

impl TelegramClient {
    pub fn new(bot_token: &str) -> Self {
        Self {
            http: Client::new(),
            base: format!("https://api.telegram.org/bot{bot_token}"),
        }
    }

    /// Call one Bot API method and unwrap the response envelope.
    async fn call<T, B>(&self, method: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}/{}", self.base, method);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("{method} request failed"))?;
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .with_context(|| format!("failed to decode {method} response"))?;
        if !envelope.ok {
            bail!(
                "{method} rejected: {}",
                envelope.description.as_deref().unwrap_or("no description")
            );
        }
        envelope
            .result
            .ok_or_else(|| anyhow!("{method} returned no result"))
    }

    /// Drop any configured webhook so long polling receives the updates.
    pub async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<()> {
        self.call::<bool, _>(
            "deleteWebhook",
            &DeleteWebhookRequest {
                drop_pending_updates,
            },
        )
        .await?;
        Ok(())
    }

    /// Long-poll for the next batch of updates.
    pub async fn get_updates(&self, offset: Option<i64>, timeout: u64) -> Result<Vec<Update>> {
        self.call("getUpdates", &GetUpdatesRequest { offset, timeout })
            .await
    }
}

#[async_trait]
impl ChatSink for TelegramClient {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<i64> {
        let sent: IncomingMessage = self
            .call(
                "sendMessage",
                &SendMessageRequest {
                    chat_id,
                    text,
                    reply_to_message_id: None,
                    reply_markup: None,
                },
            )
            .await?;
        Ok(sent.message_id)
    }

    async fn send_with_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: &[Vec<ActionButton>],
    ) -> Result<i64> {
        let sent: IncomingMessage = self
            .call(
                "sendMessage",
                &SendMessageRequest {
                    chat_id,
                    text,
                    reply_to_message_id: None,
                    reply_markup: Some(InlineKeyboardMarkup::from_buttons(keyboard)),
                },
            )
            .await?;
        Ok(sent.message_id)
    }

    async fn clear_keyboard(&self, chat_id: i64, message_id: i64) -> Result<()> {
        // Omitting reply_markup removes the keyboard.
        self.call::<serde_json::Value, _>(
            "editMessageReplyMarkup",
            &EditReplyMarkupRequest {
                chat_id,
                message_id,
            },
        )
        .await?;
        Ok(())
    }

    async fn reply(&self, chat_id: i64, reply_to_message_id: i64, text: &str) -> Result<i64> {
        let sent: IncomingMessage = self
            .call(
                "sendMessage",
                &SendMessageRequest {
                    chat_id,
                    text,
                    reply_to_message_id: Some(reply_to_message_id),
                    reply_markup: None,
                },
            )
            .await?;
        Ok(sent.message_id)
    }

    async fn answer_callback(&self, callback_id: &str, text: &str, show_alert: bool) -> Result<()> {
        self.call::<bool, _>(
            "answerCallbackQuery",
            &AnswerCallbackRequest {
                callback_query_id: callback_id,
                text,
                show_alert,
            },
        )
        .await?;
        Ok(())
    }
}

/// Translate a raw update into a domain event, or `None` for anything the
/// bot does not handle (other commands, edits, stale callbacks).
pub fn event_from_update(update: Update) -> Option<Event> {
    if let Some(cq) = update.callback_query {
        let message = cq.message?;
        let token = cq.data?;
        return Some(Event::Action(CallbackEvent {
            callback_id: cq.id,
            chat_id: message.chat.id,
            message_id: message.message_id,
            token,
        }));
    }

    let message = update.message?;
    let text = message.text?;
    let text = text.trim();
    if text == "/start" || text.starts_with("/start ") {
        Some(Event::Start {
            chat_id: message.chat.id,
        })
    } else if text == "/next" {
        Some(Event::Next {
            chat_id: message.chat.id,
        })
    } else {
        None
    }
}
