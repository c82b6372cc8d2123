use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;

use menubot::bot;
use menubot::completion::CompletionClient;
use menubot::config::Config;
use menubot::state::ConversationStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting menu chat bot");

    // All three settings are required; a missing one aborts before serving.
    let config = Config::from_env()?;

    let bot = Bot::new(config.telegram_token.clone());
    let me = bot.get_me().await?;
    info!(username = %me.username(), "bot identity resolved, starting dispatcher");

    let store = ConversationStore::new();
    let completions = Arc::new(CompletionClient::new(
        config.completion_api_key,
        config.completion_model,
    ));

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let store = store.clone();
            let completions = Arc::clone(&completions);
            move |bot: Bot, msg: Message| {
                let store = store.clone();
                let completions = Arc::clone(&completions);
                async move { bot::message_handler(bot, msg, store, completions).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let store = store.clone();
            move |bot: Bot, q: CallbackQuery| {
                let store = store.clone();
                async move { bot::callback_handler(bot, q, store).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
