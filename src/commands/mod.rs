//! Bot command parsing, execution and response formatting.
//!
//! # Overview
//!
//! The commands module handles the lifecycle of a bot command:
//! 1. **Parsing** - Extracting the player tag and verification code from a [`CommandMessage`]
//! 2. **Execution** - Routing the [`command::Command`] to its handler
//! 3. **Response** - Formatting results and errors as Telegram HTML
//!
//! # Architecture
//!
//! ```text
//! Telegram Message
//!      │
//!      ▼
//! ┌────────────────┐
//! │ CommandMessage │  ← built by the telegram module
//! └────────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← execute()
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────────────┐
//! │ Action Handlers     │
//! │  - handle_help      │
//! │  - handle_stats     │
//! │  - handle_verify    │
//! └─────────────────────┘
//!      │
//!      ▼
//! ┌──────────────────────┐
//! │  CommandResult       │
//! │  - media             │
//! │  - response (HTML)   │
//! │  - delete_trigger    │
//! └──────────────────────┘
//! ```
//!
//! Handlers never talk to Telegram. The [`CommandResult`] describes what must be
//! sent and the caller applies it.
//!
//! # Available Commands
//!
//! | Command | Arguments | Description |
//! |---------|-----------|-------------|
//! | `/start`, `/help` | None | Intro video and help message |
//! | `/stats` | `#playerTag` | Brief stats of a player |
//! | `/verify` | `#playerTag apiToken` | Verify the ownership of an account |
//!
//! # Error Handling
//!
//! Handler errors are [`CommandError`](crate::error::CommandError)s. User errors are
//! shown verbatim, any other error is replaced by a generic message.

mod actions;
pub mod command;
mod commander;
mod html_response;
mod parser;

pub use crate::commands::command::Command;
pub use crate::commands::commander::Commander;

/// A command message as received from the chat.
///
/// # Fields
///
/// * `chat_id` - Chat where the command was sent
/// * `message_id` - Id of the command message, used to delete it
/// * `text` - Raw message text
/// * `spans` - Entities annotating the text, in message order
#[derive(Debug, Clone, Default)]
pub struct CommandMessage {
    /// Chat where the command was sent
    pub chat_id: i64,
    /// Id of the command message
    pub message_id: i32,
    /// Raw message text, absent for media-only messages
    pub text: Option<String>,
    /// Annotated substrings of the text
    pub spans: Vec<TextSpan>,
}

/// A substring of a message marked by the chat client.
///
/// `offset` and `length` are expressed in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Kind of annotation
    pub kind: SpanKind,
    /// Start of the substring
    pub offset: usize,
    /// Length of the substring
    pub length: usize,
}

/// Kinds of text annotations the bot cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// A `#hashtag`
    Hashtag,
    /// A `/command`
    BotCommand,
    /// Any other annotation (mention, url, formatting...)
    Other,
}

/// Media attachment sent before the text response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    /// Sticker identified by its Telegram file id
    Sticker(String),
    /// Video identified by its Telegram file id
    Video(String),
}

/// Result of command execution.
///
/// # Examples
///
/// ```no_run
/// let result = CommandResult {
///     media: None,
///     response: "✅ Ownership confirmed!".to_string(),
///     delete_trigger: true,
/// };
/// ```
#[derive(Debug)]
pub struct CommandResult {
    /// Media to send before the response
    pub media: Option<Media>,
    /// HTML formatted response message
    pub response: String,
    /// Whether the command message must be deleted once answered
    pub delete_trigger: bool,
}
