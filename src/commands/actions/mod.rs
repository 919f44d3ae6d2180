//! Command action handlers.
//!
//! Individual handler functions for each bot command. Each handler receives the
//! [`CommandMessage`](crate::commands::CommandMessage) it answers to and returns a
//! [`CommandResult`](crate::commands::CommandResult).
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Extract the command arguments from the message
//! 2. Call the Clash of Clans API when needed
//! 3. Return a result with the HTML response, the media to send first and
//!    whether the command message must be deleted
//!
//! Errors are caught here: one failing command never affects another one.
//!
//! # Available Handlers
//!
//! - [`handle_help`] - Intro video and help message
//! - [`handle_stats`] - Brief stats of a player
//! - [`handle_verify`] - Ownership verification of an account

use log::{debug, error};

use crate::{commands::html_response::format_command_error, error::CommandError};

mod help;
mod stats;
mod verify;

pub use crate::commands::actions::{
    help::handle_help, stats::handle_stats, verify::handle_verify,
};

/// Logs a command error and formats the message shown to the user.
fn report_error(command: &str, error: &CommandError) -> String {
    match error.is_user_facing() {
        true => debug!("{} command rejected: {}", command, error),
        false => error!("{} command failed: {}", command, error),
    }

    format_command_error(error)
}
