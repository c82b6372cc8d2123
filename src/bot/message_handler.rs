//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error};

use crate::completion::CompletionClient;
use crate::dialogue::{on_text, TextReply};
use crate::state::ConversationStore;

use super::ui_builder::{show_main_menu, COMPLETION_FAILED_TEXT, RESPONSE_PREFIX};

/// Handle one incoming message. Non-text messages (photos, stickers, ...)
/// are ignored without a reply or a state change.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    store: ConversationStore,
    completions: Arc<CompletionClient>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = %msg.chat.id, "ignoring non-text message");
        return Ok(());
    };

    let chat_id = msg.chat.id;
    debug!(chat_id = %chat_id, text = %text, "received text message");

    // One chat's events are handled strictly in arrival order; other chats
    // proceed in parallel, even while a completion is in flight here.
    let _guard = store.lock_conversation(chat_id).await;

    let awaiting = store.awaiting_prompt(chat_id).await;
    let (reply, next_awaiting) = on_text(text, awaiting);

    // Commit the transition before any network call so a failed send can
    // never leave the chat stuck awaiting a prompt.
    store.set_awaiting(chat_id, next_awaiting).await;

    match reply {
        TextReply::MainMenu => show_main_menu(&bot, chat_id, None).await?,
        TextReply::Echo(body) => {
            bot.send_message(chat_id, body).await?;
        }
        TextReply::Prompt(prompt) => match completions.complete(&prompt).await {
            Ok(answer) => {
                bot.send_message(chat_id, format!("{RESPONSE_PREFIX}{answer}"))
                    .await?;
                show_main_menu(&bot, chat_id, None).await?;
            }
            Err(e) => {
                error!(chat_id = %chat_id, error = %e, "completion request failed");
                bot.send_message(chat_id, COMPLETION_FAILED_TEXT).await?;
            }
        },
    }

    Ok(())
}
