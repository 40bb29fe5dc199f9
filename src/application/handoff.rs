//! # Application Hand-off
//!
//! The two-step protocol behind the bot: claiming the next unclaimed
//! application (`UNCLAIMED -> IN_PROGRESS`) and resolving a claimed one to a
//! terminal status. CRM failures are reported to the operator in the same
//! conversation and never abort the event loop.

use anyhow::Result;

use crate::application::formatter;
use crate::domain::traits::{ChatSink, CrmApi};
use crate::domain::types::{Action, ApplicationStatus, CallbackEvent};
use crate::strings::messages;

/// Claim the next pending application and present it with action buttons.
///
/// Picks the first element in the order the CRM returns; there is no other
/// ranking. If the claim update fails the application stays unclaimed from
/// this bot's perspective and no compensating call is made.
pub async fn claim_next<A, C>(api: &A, chat: &C, manager_id: &str, chat_id: i64) -> Result<()>
where
    A: CrmApi,
    C: ChatSink,
{
    let items = match api.fetch_new().await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Listing new applications failed: {e}");
            chat.send_message(chat_id, &messages::claim_failed(&e.to_string()))
                .await?;
            return Ok(());
        }
    };

    let Some(app) = items.first() else {
        chat.send_message(chat_id, messages::NO_NEW_APPLICATIONS).await?;
        return Ok(());
    };

    if let Err(e) = api
        .update_status(&app.id, ApplicationStatus::InProgress, manager_id, None)
        .await
    {
        tracing::warn!("Claiming application {} failed: {e}", app.id);
        chat.send_message(chat_id, &messages::claim_failed(&e.to_string()))
            .await?;
        return Ok(());
    }

    chat.send_with_keyboard(
        chat_id,
        &formatter::render(app),
        &formatter::action_keyboard(&app.id),
    )
    .await?;
    Ok(())
}

/// Resolve a claimed application to the terminal status carried by the
/// pressed button, then strip the buttons and confirm.
pub async fn resolve<A, C>(api: &A, chat: &C, manager_id: &str, event: &CallbackEvent) -> Result<()>
where
    A: CrmApi,
    C: ChatSink,
{
    let (action, app_id) = match Action::parse_token(&event.token) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("{e}");
            chat.answer_callback(
                &event.callback_id,
                &messages::callback_error(&e.to_string()),
                true,
            )
            .await?;
            return Ok(());
        }
    };

    let status = action.target_status();
    if let Err(e) = api.update_status(&app_id, status, manager_id, None).await {
        tracing::warn!("Resolving application {app_id} failed: {e}");
        chat.answer_callback(
            &event.callback_id,
            &messages::callback_error(&e.to_string()),
            true,
        )
        .await?;
        return Ok(());
    }

    chat.clear_keyboard(event.chat_id, event.message_id).await?;
    chat.reply(
        event.chat_id,
        event.message_id,
        &messages::status_changed(&app_id, status),
    )
    .await?;
    chat.answer_callback(&event.callback_id, messages::CALLBACK_DONE, false)
        .await?;
    Ok(())
}
