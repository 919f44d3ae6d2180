//! Help command handler.
//!
//! Answers `/start` and `/help` with the intro video followed by the list of
//! commands. This is a stateless command that always returns the same result.

use log::debug;

use crate::commands::{CommandResult, Media, html_response::format_help};

/// Returns the intro video and the help message.
///
/// # Arguments
///
/// * `intro_video` - Telegram file id of the video sent before the help message
pub fn handle_help(intro_video: &str) -> CommandResult {
    debug!("handling help command");

    CommandResult {
        media: Some(Media::Video(intro_video.to_owned())),
        response: format_help(),
        delete_trigger: false,
    }
}
