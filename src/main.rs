//! coc-helper - A Telegram bot for Clash of Clans players.
//!
//! This is the main entry point of the bot, which relays Telegram commands to
//! the Clash of Clans API and answers with formatted results.
//!
//! # Features
//!
//! - **Player Stats**: `/stats #playerTag` shows the town hall level, trophies,
//!   war stars and clan of a player, with a link to their public summary page
//! - **Ownership Verification**: `/verify #playerTag apiToken` checks that the
//!   API token shown in the game settings belongs to the player
//! - **Clean Chats**: `/stats` and `/verify` messages are deleted once answered,
//!   the verification token doesn't stay in the chat
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! telegram:
//!   token: "123456:ABC-DEF"
//!
//! coc:
//!   url: "https://api.clashofclans.com/v1"
//!   token: "eyJ0eXAiOiJKV1Qi..."
//! ```
//!
//! or use environment variables only:
//!
//! ```bash
//! export BOT_TOKEN="123456:ABC-DEF"
//! export COC_TOKEN="eyJ0eXAiOiJKV1Qi..."
//! export COC_API_URL="https://api.clashofclans.com/v1"
//! ```
//!
//! See the [`config`] module for every option.
//!
//! # Usage
//!
//! ```bash
//! coc-helper --config config.yaml
//! ```
//!
//! # Architecture
//!
//! - [`bot`] - Telegram dispatcher wiring
//! - [`coc`] - Clash of Clans API client
//! - [`commands`] - Command parsing, execution and HTML formatting
//! - [`config`] - Configuration loading from YAML and environment variables
//! - [`error`] - Command error types
//! - [`telegram`] - Telegram client and message conversion
//! - [`utils`] - Text helpers
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod coc;
mod commands;
mod config;
mod error;
mod telegram;
mod utils;

/// Command-line arguments for the bot.
///
/// # Examples
///
/// ```bash
/// coc-helper --config config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Optional when every value is given through environment variables.
    #[arg(short, long)]
    config: Option<String>,
}

/// Main entry point for the bot.
///
/// 1. **Logging Setup**: `info` level by default, overridden by `RUST_LOG`
/// 2. **Argument Parsing**: Parses command-line arguments using `clap`
/// 3. **Configuration Loading**: Merges the YAML file and the environment
/// 4. **Bot Execution**: Handles Telegram updates until Ctrl-C
///
/// A configuration error is logged and stops the process before any request
/// is sent.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug coc-helper --config config.yaml
/// ```
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting coc-helper {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let bot = match Bot::new(config) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            std::process::exit(1);
        }
    };
    bot.start().await;
}
