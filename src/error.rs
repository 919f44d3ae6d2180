//! Error types shared by the command handlers and the Clash of Clans client.
//!
//! Errors are split in two families:
//!
//! - **User errors** ([`CommandError::Usage`], [`CommandError::NotFound`]) carry a
//!   message that is shown verbatim to the user.
//! - **Masked errors** ([`CommandError::Upstream`]) are logged and replaced by a
//!   generic message, their details never reach the chat.

use reqwest::StatusCode;
use thiserror::Error;

/// Error raised while handling a bot command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command text is malformed (missing tag or verification code).
    #[error("{0}")]
    Usage(String),
    /// The Clash of Clans API has no account for the given tag.
    #[error("Couldn't find account by the tag {0}")]
    NotFound(String),
    /// Anything else: network failure, unexpected status, invalid JSON.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Failure of a request to the Clash of Clans API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The API answered with a status the client doesn't handle.
    #[error("unexpected status {0}")]
    Status(StatusCode),
    /// The request could not be sent or its body could not be decoded.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl From<reqwest::Error> for CommandError {
    fn from(error: reqwest::Error) -> Self {
        CommandError::Upstream(UpstreamError::Request(error))
    }
}

impl CommandError {
    /// Whether the error message can be shown to the user as is.
    pub fn is_user_facing(&self) -> bool {
        match self {
            CommandError::Usage(_) | CommandError::NotFound(_) => true,
            CommandError::Upstream(_) => false,
        }
    }
}
