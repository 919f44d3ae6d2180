//! Telegram integration for the bot.
//!
//! This module adapts the Telegram Bot API, reached through `teloxide`, to the
//! command handlers:
//! - [`message`] converts incoming messages into
//!   [`CommandMessage`](crate::commands::CommandMessage)s
//! - [`client`] sends replies, media and deletions
//!
//! # Best-effort delivery
//!
//! Every [`Responder`] operation is best-effort: a failure is logged and
//! otherwise ignored, it is neither returned nor retried. A reply that can't be
//! delivered or a command message that can't be deleted never affects other
//! commands.

mod client;
mod message;

use mockall::automock;

use crate::commands::Media;

pub use crate::telegram::client::TelegramClient;

/// Trait for answering a command in a chat.
///
/// This trait abstracts the Telegram operations for easier testing with mocks.
#[automock]
pub trait Responder {
    /// Sends an HTML formatted message.
    async fn send_html(&self, chat_id: i64, text: &str);
    /// Sends a sticker or a video.
    async fn send_media(&self, chat_id: i64, media: &Media);
    /// Deletes a message.
    async fn delete_message(&self, chat_id: i64, message_id: i32);
}
