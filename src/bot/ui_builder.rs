//! UI Builder module for creating keyboards and static screen content

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode};

// Callback tokens for the compile-time enumerated menu options.
pub const TOKEN_STUDENT: &str = "student";
pub const TOKEN_IT_TECHNOLOGIES: &str = "it_technologies";
pub const TOKEN_CONTACTS: &str = "contacts";
pub const TOKEN_CHATGPT: &str = "chatgpt";
pub const TOKEN_BACK_TO_MENU: &str = "back_to_menu";

/// Greeting caption shown above the main menu grid.
pub const MAIN_MENU_TEXT: &str = "<b>Bас вітає чат-бот!</b> Виберіть відповідну команду:";
/// Sent as a new message when the user picks the ChatGPT option.
pub const PROMPT_REQUEST_TEXT: &str = "Введіть ваш запит:";
/// Sent when the completion provider fails.
pub const COMPLETION_FAILED_TEXT: &str = "Не вдалося отримати відповідь, спробуйте ще раз.";
pub const ECHO_PREFIX: &str = "You chose: ";
pub const RESPONSE_PREFIX: &str = "Response: ";

/// Main menu grid, row-major: (label, callback token).
pub const MAIN_MENU: [[(&str, &str); 2]; 2] = [
    [
        ("Student", TOKEN_STUDENT),
        ("IT-technologies", TOKEN_IT_TECHNOLOGIES),
    ],
    [("Contacts", TOKEN_CONTACTS), ("ChatGPT", TOKEN_CHATGPT)],
];

/// Static detail-view bodies keyed by callback token, HTML markup.
const DETAIL_VIEWS: [(&str, &str); 3] = [
    (TOKEN_STUDENT, "<b>ст. Маланічев Д.А.</b> гр. ІС-13"),
    (
        TOKEN_IT_TECHNOLOGIES,
        "<b>ІТ-технології:</b> Front-end Back-End WEB-технології",
    ),
    (
        TOKEN_CONTACTS,
        "<b>Контакти:</b> телефон 123-45-45-45 e-mail: malanichev.denys@lll.kpi.ua",
    ),
];

/// Look up the static body for a detail-view token.
pub fn detail_body(token: &str) -> Option<&'static str> {
    DETAIL_VIEWS
        .iter()
        .find(|(candidate, _)| *candidate == token)
        .map(|(_, body)| *body)
}

/// Create the 2×2 inline keyboard for the main menu.
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    let rows = MAIN_MENU.iter().map(|row| {
        row.iter()
            .map(|(label, token)| InlineKeyboardButton::callback(*label, *token))
            .collect::<Vec<_>>()
    });

    InlineKeyboardMarkup::new(rows)
}

/// Create the single-button keyboard shown under every detail view.
pub fn back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Back",
        TOKEN_BACK_TO_MENU,
    )]])
}

/// Show the main menu: edit `existing` in place when returning from a
/// submenu, send a new message otherwise (first contact, after a completion
/// round trip).
pub async fn show_main_menu(bot: &Bot, chat_id: ChatId, existing: Option<MessageId>) -> Result<()> {
    match existing {
        Some(message_id) => {
            bot.edit_message_text(chat_id, message_id, MAIN_MENU_TEXT)
                .parse_mode(ParseMode::Html)
                .reply_markup(main_menu_keyboard())
                .await?;
        }
        None => {
            bot.send_message(chat_id, MAIN_MENU_TEXT)
                .parse_mode(ParseMode::Html)
                .reply_markup(main_menu_keyboard())
                .await?;
        }
    }

    Ok(())
}
