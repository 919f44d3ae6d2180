//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which routes parsed commands
//! to their handlers.
//!
//! # Flow
//!
//! ```text
//! Telegram Message → Command + CommandMessage → execute() → CommandResult
//! ```

use log::debug;

use crate::{
    coc::Requester,
    commands::{
        CommandMessage, CommandResult,
        actions::{handle_help, handle_stats, handle_verify},
        command::Command,
    },
    config::Telegram,
};

/// Command orchestrator for executing bot commands.
///
/// The Commander is shared by every update handled by the dispatcher. It holds
/// no mutable state: each command is handled independently.
///
/// # Supported Commands
///
/// - `/start`, `/help` - Intro video and help message
/// - `/stats #playerTag` - Brief stats of a player
/// - `/verify #playerTag apiToken` - Ownership verification
pub struct Commander<R: Requester> {
    /// Clash of Clans API client
    requester: R,
    /// File id of the video sent with the help message
    intro_video: String,
    /// File id of the sticker sent before player stats
    ack_sticker: String,
}

impl<R: Requester> Commander<R> {
    /// Creates a new Commander.
    ///
    /// # Arguments
    ///
    /// * `requester` - Clash of Clans API client
    /// * `telegram` - Telegram configuration holding the media file ids
    pub fn new(requester: R, telegram: &Telegram) -> Self {
        Commander {
            requester,
            intro_video: telegram.intro_video.clone(),
            ack_sticker: telegram.ack_sticker.clone(),
        }
    }

    /// Executes a command and returns the replies to send.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Start`], [`Command::Help`] → [`handle_help`]
    /// - [`Command::Stats`] → [`handle_stats`]
    /// - [`Command::Verify`] → [`handle_verify`]
    pub async fn execute(&self, command: &Command, message: &CommandMessage) -> CommandResult {
        debug!("executing {:?} in chat {}", command, message.chat_id);

        match command {
            Command::Start | Command::Help => handle_help(&self.intro_video),
            Command::Stats => handle_stats(&self.requester, message, &self.ack_sticker).await,
            Command::Verify => handle_verify(&self.requester, message).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coc::{MockRequester, PlayerStats, VerificationResult},
        commands::{Media, SpanKind, TextSpan},
    };

    fn create_telegram_config() -> Telegram {
        Telegram {
            token: "bot-token".to_owned(),
            intro_video: "video-id".to_owned(),
            ack_sticker: "sticker-id".to_owned(),
        }
    }

    fn create_message(text: &str, spans: Vec<TextSpan>) -> CommandMessage {
        CommandMessage {
            chat_id: 1,
            message_id: 10,
            text: Some(text.to_owned()),
            spans,
        }
    }

    #[tokio::test]
    async fn test_execute_start_and_help() {
        let commander = Commander::new(MockRequester::new(), &create_telegram_config());

        for command in [Command::Start, Command::Help] {
            let result = commander
                .execute(&command, &create_message("/help", vec![]))
                .await;
            assert_eq!(result.media, Some(Media::Video("video-id".to_owned())));
            assert!(result.response.contains("Welcome to CoC Helper Bot"));
            assert!(!result.delete_trigger);
        }
    }

    #[tokio::test]
    async fn test_execute_stats() {
        let mut mock_requester = MockRequester::new();
        mock_requester.expect_lookup_player().times(1).returning(|_| {
            Ok(PlayerStats {
                name: "Ash".to_owned(),
                clan: None,
                town_hall_level: 14,
                trophies: 5000,
                best_trophies: 5200,
                war_stars: 900,
            })
        });
        mock_requester
            .expect_get_summary_url()
            .returning(|_, _| "http://summary/ash-2pp".to_owned());
        let commander = Commander::new(mock_requester, &create_telegram_config());

        let message = create_message(
            "/stats #2PP",
            vec![TextSpan {
                kind: SpanKind::Hashtag,
                offset: 7,
                length: 4,
            }],
        );
        let result = commander.execute(&Command::Stats, &message).await;

        assert_eq!(result.media, Some(Media::Sticker("sticker-id".to_owned())));
        assert!(result.response.contains("Ash #2PP"));
        assert!(result.delete_trigger);
    }

    #[tokio::test]
    async fn test_execute_verify() {
        let mut mock_requester = MockRequester::new();
        mock_requester.expect_verify_token().times(1).returning(|_, _| {
            Ok(VerificationResult {
                tag: None,
                status: "ok".to_owned(),
            })
        });
        let commander = Commander::new(mock_requester, &create_telegram_config());

        let result = commander
            .execute(
                &Command::Verify,
                &create_message("/verify #ABC123 xyz789", vec![]),
            )
            .await;

        assert!(result.media.is_none());
        assert_eq!(result.response, "✅ Ownership confirmed!");
        assert!(result.delete_trigger);
    }
}
