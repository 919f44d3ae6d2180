//! Bot command definitions.
//!
//! The commands are parsed by teloxide's [`BotCommands`] derive. Arguments are
//! not captured here: each handler extracts what it needs from the full
//! [`CommandMessage`](crate::commands::CommandMessage), since `/stats` relies on
//! the hashtag entities Telegram attaches to the message.

use teloxide::utils::command::BotCommands;

// No doc comments on this enum: the derive reads them as descriptions.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "CoC Helper commands:")]
pub enum Command {
    #[command(description = "show basic intro")]
    Start,
    #[command(description = "show basic intro")]
    Help,
    // `/stats #playerTag`
    #[command(description = "show brief stats of a player")]
    Stats,
    // `/verify #playerTag apiToken`
    #[command(description = "verify account ownership")]
    Verify,
}
