//! Conversation state machine for the menu dialogue.
//!
//! A conversation is always in exactly one of two modes, encoded as the
//! per-chat `awaiting_prompt` flag: browsing the menus (`false`) or waiting
//! for a free-text prompt to relay to the completion provider (`true`).
//! The functions here decide transitions and reply plans; the actual
//! sending stays in the handlers.

use crate::bot::ui_builder::{detail_body, ECHO_PREFIX, TOKEN_BACK_TO_MENU, TOKEN_CHATGPT};

/// Reply plan for one incoming text message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextReply {
    /// Send a brand-new main menu.
    MainMenu,
    /// Echo the text back as a plain message.
    Echo(String),
    /// Relay the text to the completion provider.
    Prompt(String),
}

/// Decide the reaction to a text message and the next flag value.
///
/// The awaiting check comes first: while a prompt is expected, every text,
/// `/start` included, is consumed as the prompt.
pub fn on_text(text: &str, awaiting_prompt: bool) -> (TextReply, bool) {
    if awaiting_prompt {
        (TextReply::Prompt(text.to_owned()), false)
    } else if text == "/start" {
        (TextReply::MainMenu, false)
    } else {
        (TextReply::Echo(format!("{ECHO_PREFIX}{text}")), false)
    }
}

/// Reply plan for one callback-query button press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackReply {
    /// Edit the pressed message into a detail view with a Back button.
    Detail(&'static str),
    /// Send a new message asking for a free-text prompt.
    AskPrompt,
    /// Edit the pressed message back into the main menu.
    MainMenu,
    /// Unrecognized token; do nothing.
    Ignore,
}

/// Decide the reaction to a callback token and the next flag value.
pub fn on_callback(data: &str, awaiting_prompt: bool) -> (CallbackReply, bool) {
    match data {
        TOKEN_CHATGPT => (CallbackReply::AskPrompt, true),
        TOKEN_BACK_TO_MENU => (CallbackReply::MainMenu, false),
        other => match detail_body(other) {
            Some(body) => (CallbackReply::Detail(body), awaiting_prompt),
            None => (CallbackReply::Ignore, awaiting_prompt),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_shows_menu_while_browsing() {
        let (reply, next) = on_text("/start", false);
        assert_eq!(reply, TextReply::MainMenu);
        assert!(!next);
    }

    #[test]
    fn test_plain_text_is_echoed() {
        let (reply, next) = on_text("Contacts", false);
        assert_eq!(reply, TextReply::Echo("You chose: Contacts".to_owned()));
        assert!(!next);
    }

    #[test]
    fn test_awaiting_text_becomes_prompt() {
        let (reply, next) = on_text("what is rust", true);
        assert_eq!(reply, TextReply::Prompt("what is rust".to_owned()));
        assert!(!next);
    }

    #[test]
    fn test_start_is_a_prompt_while_awaiting() {
        let (reply, next) = on_text("/start", true);
        assert_eq!(reply, TextReply::Prompt("/start".to_owned()));
        assert!(!next);
    }

    #[test]
    fn test_chatgpt_sets_awaiting() {
        let (reply, next) = on_callback(TOKEN_CHATGPT, false);
        assert_eq!(reply, CallbackReply::AskPrompt);
        assert!(next);
    }

    #[test]
    fn test_back_clears_awaiting() {
        let (reply, next) = on_callback(TOKEN_BACK_TO_MENU, true);
        assert_eq!(reply, CallbackReply::MainMenu);
        assert!(!next);
    }

    #[test]
    fn test_detail_leaves_flag_unchanged() {
        let (reply, next) = on_callback("student", true);
        assert!(matches!(reply, CallbackReply::Detail(_)));
        assert!(next);
    }

    #[test]
    fn test_unknown_token_is_ignored() {
        let (reply, next) = on_callback("nope", false);
        assert_eq!(reply, CallbackReply::Ignore);
        assert!(!next);
    }
}
