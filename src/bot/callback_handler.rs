//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, error};

use crate::dialogue::{on_callback, CallbackReply};
use crate::state::ConversationStore;

use super::ui_builder::{back_keyboard, show_main_menu, PROMPT_REQUEST_TEXT};

/// Handle one callback query from an inline keyboard button press.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, store: ConversationStore) -> Result<()> {
    let data = q.data.as_deref().unwrap_or("");

    if let Some(msg) = &q.message {
        let chat_id = msg.chat().id;
        let message_id = msg.id();

        let _guard = store.lock_conversation(chat_id).await;

        let awaiting = store.awaiting_prompt(chat_id).await;
        let (reply, next_awaiting) = on_callback(data, awaiting);
        store.set_awaiting(chat_id, next_awaiting).await;

        match reply {
            CallbackReply::Detail(body) => {
                // A stale message id is logged and dropped.
                match bot
                    .edit_message_text(chat_id, message_id, body)
                    .parse_mode(ParseMode::Html)
                    .reply_markup(back_keyboard())
                    .await
                {
                    Ok(_) => (),
                    Err(e) => {
                        error!(chat_id = %chat_id, error = %e, "failed to edit message to detail view")
                    }
                }
            }
            CallbackReply::AskPrompt => {
                bot.send_message(chat_id, PROMPT_REQUEST_TEXT)
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
            CallbackReply::MainMenu => {
                if let Err(e) = show_main_menu(&bot, chat_id, Some(message_id)).await {
                    error!(chat_id = %chat_id, error = %e, "failed to edit message back to main menu");
                }
            }
            CallbackReply::Ignore => {
                debug!(chat_id = %chat_id, token = %data, "ignoring unrecognized callback token");
            }
        }
    }

    // Answer the callback query to remove the loading state, including for
    // ignored tokens.
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
