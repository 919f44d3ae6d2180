//! Configuration structures for the coc-helper bot.
//!
//! The configuration is split into two sections: Telegram bot settings and
//! Clash of Clans API settings. It is loaded once at startup and handed to the
//! components that need it.
//!
//! # Configuration File Format
//!
//! ```yaml
//! telegram:
//!   # Bot token given by @BotFather
//!   token: "123456:ABC-DEF"
//!   # Optional file ids of the media sent by the bot
//!   intro_video: "BAACAgIAAxkBAAPv..."
//!   ack_sticker: "CAACAgEAAxkBAANO..."
//!
//! coc:
//!   # Base URL of the Clash of Clans API
//!   url: "https://api.clashofclans.com/v1"
//!   # API token from developer.clashofclans.com
//!   token: "eyJ0eXAiOiJKV1Qi..."
//!   # Optional base URL of the player summary links
//!   summary_url: "https://www.clashofstats.com/players"
//!   # Optional request timeout in seconds, no timeout when absent
//!   timeout: 10
//! ```
//!
//! # Environment Variables
//!
//! Every value can be set with the `COC_HELPER_` prefix, sections being
//! separated by a double underscore:
//!
//! ```bash
//! export COC_HELPER_TELEGRAM__TOKEN="123456:ABC-DEF"
//! export COC_HELPER_COC__URL="https://api.clashofclans.com/v1"
//! export COC_HELPER_COC__TOKEN="eyJ0eXAiOiJKV1Qi..."
//! ```
//!
//! The shorter `BOT_TOKEN`, `COC_TOKEN` and `COC_API_URL` variables are also
//! accepted.

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Default file id of the video sent with the help message.
const DEFAULT_INTRO_VIDEO: &str =
    "BAACAgIAAxkBAAPvZMrHoFvK223F0uVmCJm0P1Q7V6IAAg8yAAL2e1FKaZZCAfErnfgvBA";
/// Default file id of the sticker sent before player stats.
const DEFAULT_ACK_STICKER: &str =
    "CAACAgEAAxkBAANOZMqb1NYuIzcycWhj8XHUX6dj77AAAlAAA8GZigABNpX804CbHk0vBA";
/// Default base URL of the player summary links.
const DEFAULT_SUMMARY_URL: &str = "https://www.clashofstats.com/players";

/// Root configuration structure for the bot.
#[derive(Deserialize, Debug)]
pub struct Config {
    /// Telegram bot configuration
    pub telegram: Telegram,
    /// Clash of Clans API configuration
    pub coc: Coc,
}

/// Telegram bot configuration.
#[derive(Deserialize, Debug)]
pub struct Telegram {
    /// Bot token given by @BotFather.
    pub token: String,

    /// File id of the video sent with the help message.
    #[serde(default = "default_intro_video")]
    pub intro_video: String,

    /// File id of the sticker sent before player stats.
    #[serde(default = "default_ack_sticker")]
    pub ack_sticker: String,
}

/// Clash of Clans API configuration.
#[derive(Deserialize, Debug)]
pub struct Coc {
    /// Base URL of the Clash of Clans API.
    ///
    /// # Examples
    ///
    /// - `https://api.clashofclans.com/v1`
    /// - `https://cocproxy.royaleapi.dev/v1`
    pub url: String,

    /// Bearer token sent with every request.
    pub token: String,

    /// Base URL of the public player summary pages.
    #[serde(default = "default_summary_url")]
    pub summary_url: String,

    /// Request timeout in seconds.
    ///
    /// Requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout: Option<u64>,
}

fn default_intro_video() -> String {
    DEFAULT_INTRO_VIDEO.to_owned()
}

fn default_ack_sticker() -> String {
    DEFAULT_ACK_STICKER.to_owned()
}

fn default_summary_url() -> String {
    DEFAULT_SUMMARY_URL.to_owned()
}

impl Config {
    /// Loads the configuration.
    ///
    /// Values are merged in this order, later sources overriding earlier ones:
    /// 1. the YAML file at `path`, if given
    /// 2. `BOT_TOKEN`, `COC_TOKEN` and `COC_API_URL`
    /// 3. `COC_HELPER_` prefixed variables
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be parsed or if a required value is missing.
    pub fn load(path: Option<&str>) -> Result<Self, figment::Error> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }

        figment
            .merge(Env::raw().only(&["BOT_TOKEN"]).map(|_| "telegram.token".into()))
            .merge(Env::raw().only(&["COC_TOKEN"]).map(|_| "coc.token".into()))
            .merge(Env::raw().only(&["COC_API_URL"]).map(|_| "coc.url".into()))
            .merge(Env::prefixed("COC_HELPER_").split("__"))
            .extract()
    }
}
