//! Bot module wiring Telegram to the Clash of Clans API.
//!
//! This module provides the main [`Bot`] implementation that connects the
//! Telegram dispatcher with the command handlers.
//!
//! # Command Processing Flow
//!
//! ```text
//! Telegram Update → Command filter → Execute → Send media → Send response → Delete command
//! ```
//!
//! Each update is handled in its own task by the teloxide dispatcher. Handlers
//! share no mutable state, so a slow or failing command only delays its own
//! reply.
//!
//! # Example
//!
//! ```no_run
//! let config = Config::load(Some("config.yaml"))?;
//!
//! let bot = Bot::new(config)?;
//! bot.start().await; // Runs until Ctrl-C
//! ```

use std::sync::Arc;

use log::{debug, info, trace};
use teloxide::{
    dispatching::{HandlerExt, UpdateFilterExt},
    dptree,
    prelude::{Dispatcher, Message, ResponseResult, Update},
};

use crate::{
    coc::CocRequester,
    commands::{Command, CommandMessage, CommandResult, Commander},
    config::Config,
    telegram::{Responder, TelegramClient},
};

/// Main bot structure that integrates Telegram with the Clash of Clans API.
pub struct Bot {
    /// Telegram client for sending replies.
    ///
    /// Shared with every update handler.
    telegram_client: Arc<TelegramClient>,

    /// Command executor.
    ///
    /// Holds the Clash of Clans client. Stateless and can be safely shared.
    commander: Arc<Commander<CocRequester>>,
}

impl Bot {
    /// Creates a new Bot instance from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the Clash of Clans client can't be built, for
    /// instance when the API token isn't a valid header value.
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        match config.coc.timeout {
            Some(timeout) => info!("clash of clans requests time out after {}s", timeout),
            None => info!("clash of clans requests have no timeout"),
        }

        let coc_requester = CocRequester::new(&config.coc)?;
        let commander = Arc::new(Commander::new(coc_requester, &config.telegram));
        let telegram_client = Arc::new(TelegramClient::new(&config.telegram.token));

        Ok(Bot {
            telegram_client,
            commander,
        })
    }

    /// Publishes the command list then handles updates until Ctrl-C.
    pub async fn start(self) {
        self.telegram_client.set_commands().await;

        let handler = Update::filter_message()
            .filter_command::<Command>()
            .endpoint(Self::handle_telegram_command);

        info!("listening to telegram updates");

        Dispatcher::builder(self.telegram_client.bot(), handler)
            .dependencies(dptree::deps![
                Arc::clone(&self.telegram_client),
                Arc::clone(&self.commander)
            ])
            .default_handler(|update| async move {
                trace!("ignored update {:?}", update.id);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("telegram dispatcher stopped");
    }

    /// Handles a command message received from Telegram.
    ///
    /// Errors are already turned into replies by the command handlers, so this
    /// handler never fails.
    async fn handle_telegram_command(
        message: Message,
        command: Command,
        telegram_client: Arc<TelegramClient>,
        commander: Arc<Commander<CocRequester>>,
    ) -> ResponseResult<()> {
        let command_message = CommandMessage::from(&message);
        let result = commander.execute(&command, &command_message).await;

        apply_result(telegram_client.as_ref(), &command_message, result).await;

        Ok(())
    }
}

/// Sends the replies described by a [`CommandResult`].
///
/// The media goes first, then the response. The command message is deleted
/// last when the result asks for it. Every step is best-effort, see
/// [`Responder`].
pub async fn apply_result<R: Responder>(
    responder: &R,
    message: &CommandMessage,
    result: CommandResult,
) {
    if let Some(media) = &result.media {
        responder.send_media(message.chat_id, media).await;
    }

    responder.send_html(message.chat_id, &result.response).await;

    if result.delete_trigger {
        debug!(
            "deleting command message {} in chat {}",
            message.message_id, message.chat_id
        );
        responder
            .delete_message(message.chat_id, message.message_id)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::{commands::Media, telegram::MockResponder};

    fn create_message() -> CommandMessage {
        CommandMessage {
            chat_id: 42,
            message_id: 10,
            text: Some("/stats #2PP".to_owned()),
            spans: vec![],
        }
    }

    #[tokio::test]
    async fn test_apply_result_sends_media_before_response() {
        let mut mock_responder = MockResponder::new();
        let mut seq = Sequence::new();

        mock_responder
            .expect_send_media()
            .withf(|chat_id, media| {
                *chat_id == 42 && *media == Media::Sticker("sticker-id".to_owned())
            })
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        mock_responder
            .expect_send_html()
            .withf(|chat_id, text| *chat_id == 42 && text == "stats")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        mock_responder
            .expect_delete_message()
            .with(eq(42_i64), eq(10_i32))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let result = CommandResult {
            media: Some(Media::Sticker("sticker-id".to_owned())),
            response: "stats".to_owned(),
            delete_trigger: true,
        };

        apply_result(&mock_responder, &create_message(), result).await;
    }

    #[tokio::test]
    async fn test_apply_result_deletes_after_error_reply() {
        let mut mock_responder = MockResponder::new();
        let mut seq = Sequence::new();

        mock_responder.expect_send_media().times(0);
        mock_responder
            .expect_send_html()
            .withf(|_, text| text.starts_with("❌"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        mock_responder
            .expect_delete_message()
            .with(eq(42_i64), eq(10_i32))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let result = CommandResult {
            media: None,
            response: "❌ Something went wrong. Please try again later".to_owned(),
            delete_trigger: true,
        };

        apply_result(&mock_responder, &create_message(), result).await;
    }

    #[tokio::test]
    async fn test_apply_result_keeps_help_command() {
        let mut mock_responder = MockResponder::new();

        mock_responder
            .expect_send_media()
            .withf(|_, media| matches!(media, Media::Video(_)))
            .times(1)
            .return_const(());
        mock_responder
            .expect_send_html()
            .times(1)
            .return_const(());
        mock_responder.expect_delete_message().times(0);

        let result = CommandResult {
            media: Some(Media::Video("video-id".to_owned())),
            response: "help".to_owned(),
            delete_trigger: false,
        };

        apply_result(&mock_responder, &create_message(), result).await;
    }
}
