//! Account ownership verification command handler.
//!
//! Checks with the Clash of Clans API that the API token shown in the player's
//! game settings belongs to the given tag.

use log::debug;

use crate::{
    coc::Requester,
    commands::{
        CommandMessage, CommandResult,
        actions::report_error,
        html_response::format_verification,
        parser::parse_tag_and_code,
    },
    error::CommandError,
};

/// Answers `/verify #playerTag apiToken`.
///
/// The command message is deleted whatever the outcome, it holds the player's
/// API token.
pub async fn handle_verify<R: Requester>(requester: &R, message: &CommandMessage) -> CommandResult {
    debug!("handling verify command of message {}", message.message_id);

    let response = match try_verify_ownership(requester, message).await {
        Ok(response) => response,
        Err(error) => report_error("verify", &error),
    };

    CommandResult {
        media: None,
        response,
        delete_trigger: true,
    }
}

async fn try_verify_ownership<R: Requester>(
    requester: &R,
    message: &CommandMessage,
) -> Result<String, CommandError> {
    let (tag, code) = parse_tag_and_code(message.text.as_deref().unwrap_or_default())?;
    let result = requester.verify_token(&tag, &code).await?;

    Ok(format_verification(result.is_verified()))
}
