//! Telegram client wrapper for bot messaging.
//!
//! This module provides a [`TelegramClient`] that wraps the teloxide bot and
//! implements [`Responder`] on top of it.

use log::{debug, error, info, warn};
use teloxide::{
    Bot as TelegramBot,
    payloads::SendMessageSetters,
    requests::Requester as _,
    types::{BotCommand, ChatId, InputFile, MessageId, ParseMode},
};

use crate::{commands::Media, telegram::Responder};

/// High-level Telegram client for bot messaging operations.
pub struct TelegramClient {
    /// Underlying teloxide bot
    bot: TelegramBot,
}

impl TelegramClient {
    /// Creates a new Telegram client.
    ///
    /// No request is sent until the client is used.
    ///
    /// # Arguments
    ///
    /// * `token` - Bot token given by @BotFather
    pub fn new(token: &str) -> Self {
        TelegramClient {
            bot: TelegramBot::new(token),
        }
    }

    /// Returns the underlying bot, to feed the update dispatcher.
    pub fn bot(&self) -> TelegramBot {
        self.bot.clone()
    }

    /// Publishes the command list shown by Telegram clients.
    ///
    /// Only `help` is published, the other commands are introduced by the help
    /// message.
    pub async fn set_commands(&self) {
        let commands = vec![BotCommand::new("help", "Show basic intro")];

        match self.bot.set_my_commands(commands).await {
            Ok(_) => info!("published bot commands"),
            Err(e) => warn!("failed to publish bot commands: {:?}", e),
        }
    }
}

impl Responder for TelegramClient {
    async fn send_html(&self, chat_id: i64, text: &str) {
        if let Err(e) = self
            .bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Html)
            .await
        {
            error!("failed to send message to chat {}: {:?}", chat_id, e);
        }
    }

    async fn send_media(&self, chat_id: i64, media: &Media) {
        let result = match media {
            Media::Sticker(file_id) => self
                .bot
                .send_sticker(ChatId(chat_id), InputFile::file_id(file_id.clone()))
                .await
                .map(|_| ()),
            Media::Video(file_id) => self
                .bot
                .send_video(ChatId(chat_id), InputFile::file_id(file_id.clone()))
                .await
                .map(|_| ()),
        };

        if let Err(e) = result {
            warn!("failed to send {:?} to chat {}: {:?}", media, chat_id, e);
        }
    }

    async fn delete_message(&self, chat_id: i64, message_id: i32) {
        if let Err(e) = self
            .bot
            .delete_message(ChatId(chat_id), MessageId(message_id))
            .await
        {
            debug!(
                "failed to delete message {} in chat {}: {:?}",
                message_id, chat_id, e
            );
        }
    }
}
