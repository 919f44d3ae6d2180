//! HTML response formatters for bot commands.
//!
//! Telegram renders these messages with the HTML parse mode, so every string
//! coming from a user or from the Clash of Clans API is escaped.

use teloxide::utils::html::escape;

use crate::{coc::PlayerStats, error::CommandError};

/// Prefix of every failure message.
const FAILURE_MARKER: &str = "❌";

/// Formats the help message showing available bot commands.
///
/// # Examples
///
/// ```no_run
/// let help = format_help();
/// assert!(help.contains("/stats #playerTag"));
/// ```
pub fn format_help() -> String {
    [
        "<b>Welcome to CoC Helper Bot</b>",
        "You can use the following commands\n",
        "/stats - Shows a brief stats for a player",
        "/stats #playerTag\n",
        "/verify - Verifies account ownership",
        "/verify #playerTag apiToken",
    ]
    .join("\n")
}

/// Formats the stats of a player.
///
/// The clan line is omitted when the player isn't in a clan.
///
/// # Arguments
///
/// * `stats` - The player profile returned by the API
/// * `tag` - The tag typed by the user
/// * `summary_url` - Link to the public summary page of the player
pub fn format_player_stats(stats: &PlayerStats, tag: &str, summary_url: &str) -> String {
    let mut lines = vec![format!(
        "<b>Found the player</b>: <a href=\"{}\">{} {}</a>\n",
        escape(summary_url),
        escape(&stats.name),
        escape(tag)
    )];

    if let Some(clan) = &stats.clan {
        lines.push(format!(
            "<b>Clan</b>: {} {}",
            escape(&clan.name),
            escape(&clan.tag)
        ));
    }

    lines.push(format!("<b>Town Hall Level</b>: {}", stats.town_hall_level));
    lines.push(format!("<b>Trophies</b>: {}", stats.trophies));
    lines.push(format!("<b>Best trophies</b>: {}", stats.best_trophies));
    lines.push(format!("<b>War stars</b>: {}", stats.war_stars));

    lines.join("\n")
}

/// Formats the outcome of an ownership verification.
pub fn format_verification(verified: bool) -> String {
    match verified {
        true => "✅ Ownership confirmed!".to_owned(),
        false => format!("{} Verification code is invalid", FAILURE_MARKER),
    }
}

/// Formats a command error for the user.
///
/// User errors are shown verbatim, any other error is replaced by a generic
/// message so that its details never reach the chat.
pub fn format_command_error(error: &CommandError) -> String {
    match error {
        CommandError::Usage(_) | CommandError::NotFound(_) => {
            format!("{} {}", FAILURE_MARKER, escape(&error.to_string()))
        }
        CommandError::Upstream(_) => format!(
            "{} Something went wrong. Please try again later",
            FAILURE_MARKER
        ),
    }
}
