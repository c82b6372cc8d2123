//! Per-conversation state shared across handler invocations.

use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::ChatId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Thread-safe store of the per-chat "awaiting free-text prompt" flag.
///
/// Entries are created lazily and live for the whole process. A chat that
/// was never seen is simply not awaiting a prompt; looking it up is never
/// an error.
#[derive(Clone, Default)]
pub struct ConversationStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    awaiting: Mutex<HashMap<ChatId, bool>>,
    locks: Mutex<HashMap<ChatId, Arc<Mutex<()>>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the chat is waiting for a free-text prompt. Defaults to
    /// `false` for chats never seen before.
    pub async fn awaiting_prompt(&self, chat: ChatId) -> bool {
        self.inner
            .awaiting
            .lock()
            .await
            .get(&chat)
            .copied()
            .unwrap_or(false)
    }

    pub async fn set_awaiting(&self, chat: ChatId, awaiting: bool) {
        self.inner.awaiting.lock().await.insert(chat, awaiting);
    }

    /// Serializes event handling for one chat. Guards are granted in FIFO
    /// order, so a chat's events are processed as they arrived while
    /// distinct chats never contend.
    pub async fn lock_conversation(&self, chat: ChatId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.locks.lock().await;
            Arc::clone(locks.entry(chat).or_default())
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unseen_chat_is_not_awaiting() {
        let store = ConversationStore::new();
        assert!(!store.awaiting_prompt(ChatId(99)).await);
    }

    #[tokio::test]
    async fn test_flag_round_trip() {
        let store = ConversationStore::new();
        store.set_awaiting(ChatId(1), true).await;
        assert!(store.awaiting_prompt(ChatId(1)).await);
        store.set_awaiting(ChatId(1), false).await;
        assert!(!store.awaiting_prompt(ChatId(1)).await);
    }
}
