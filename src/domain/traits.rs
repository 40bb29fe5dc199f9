//! # Domain Traits
//!
//! Abstract interfaces for the CRM service and the chat transport.
//! Allows for pluggable implementations in the Infrastructure layer and
//! scripted implementations in tests.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::types::{ActionButton, ApiError, Application, ApplicationStatus};

/// Abstract interface to the remote application-tracking service.
#[async_trait]
pub trait CrmApi: Send + Sync {
    /// List unclaimed applications, in the order the service returns them.
    async fn fetch_new(&self) -> Result<Vec<Application>, ApiError>;

    /// Request a status transition for one application. Single attempt;
    /// failures surface immediately to the caller.
    async fn update_status(
        &self,
        app_id: &str,
        status: ApplicationStatus,
        manager_id: &str,
        comment: Option<&str>,
    ) -> Result<Application, ApiError>;
}

/// Abstract interface for the outbound side of a chat conversation.
#[async_trait]
pub trait ChatSink: Send + Sync {
    /// Send a plain message. Returns the message id.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<i64>;

    /// Send a message carrying rows of action buttons. Returns the message id.
    async fn send_with_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: &[Vec<ActionButton>],
    ) -> Result<i64>;

    /// Remove the action buttons from a previously sent message.
    async fn clear_keyboard(&self, chat_id: i64, message_id: i64) -> Result<()>;

    /// Send a message as a reply to an earlier one. Returns the message id.
    async fn reply(&self, chat_id: i64, reply_to_message_id: i64, text: &str) -> Result<i64>;

    /// Acknowledge a button press, optionally as an alert popup.
    async fn answer_callback(&self, callback_id: &str, text: &str, show_alert: bool) -> Result<()>;
}
