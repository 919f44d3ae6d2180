//! Player stats command handler.
//!
//! Looks up the player whose tag is annotated as a hashtag in the message and
//! formats a brief summary of their profile.
//!
//! # Errors
//!
//! - Missing tag: usage message
//! - Unknown tag: "couldn't find account" message
//! - Any other failure: generic message, details are only logged

use log::debug;

use crate::{
    coc::Requester,
    commands::{
        CommandMessage, CommandResult, Media,
        actions::report_error,
        html_response::format_player_stats,
        parser::parse_tag_from_message,
    },
    error::CommandError,
};

/// Answers `/stats #playerTag`.
///
/// On success the acknowledgement sticker is sent before the stats. The command
/// message is deleted whatever the outcome.
///
/// # Arguments
///
/// * `requester` - Clash of Clans API client
/// * `message` - The command message
/// * `ack_sticker` - Telegram file id of the acknowledgement sticker
pub async fn handle_stats<R: Requester>(
    requester: &R,
    message: &CommandMessage,
    ack_sticker: &str,
) -> CommandResult {
    debug!("handling stats command of message {}", message.message_id);

    match try_get_stats(requester, message).await {
        Ok(response) => CommandResult {
            media: Some(Media::Sticker(ack_sticker.to_owned())),
            response,
            delete_trigger: true,
        },
        Err(error) => CommandResult {
            media: None,
            response: report_error("stats", &error),
            delete_trigger: true,
        },
    }
}

async fn try_get_stats<R: Requester>(
    requester: &R,
    message: &CommandMessage,
) -> Result<String, CommandError> {
    let tag = parse_tag_from_message(message)?;
    let stats = requester.lookup_player(&tag).await?;
    let summary_url = requester.get_summary_url(&stats.name, &tag);

    Ok(format_player_stats(&stats, &tag, &summary_url))
}
