//! Response structures for Clash of Clans API endpoints.
//!
//! This module contains structures for deserializing JSON responses from
//! the Clash of Clans API, and the body of the token verification request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player profile from `/players/{playerTag}`.
///
/// Only the fields displayed by the bot are deserialized, the API sends many more.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Player's display name.
    pub name: String,
    /// Clan the player belongs to, if any.
    #[serde(default)]
    pub clan: Option<PlayerClan>,
    /// Town hall level.
    pub town_hall_level: u32,
    /// Current trophy count.
    pub trophies: u32,
    /// Highest trophy count ever reached.
    pub best_trophies: u32,
    /// Stars won in clan wars.
    pub war_stars: u32,
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name={}, clan={:?}, town_hall_level={}, trophies={}, best_trophies={}, war_stars={}",
            self.name,
            self.clan,
            self.town_hall_level,
            self.trophies,
            self.best_trophies,
            self.war_stars
        )
    }
}

/// Clan summary embedded in a player profile.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerClan {
    /// Clan name.
    pub name: String,
    /// Clan tag, starting with `#`.
    pub tag: String,
}

/// Body of `POST /players/{playerTag}/verifytoken`.
#[derive(Serialize, Debug)]
pub struct VerifyTokenRequest<'a> {
    /// API token displayed in the player's game settings.
    pub token: &'a str,
}

/// Response from `POST /players/{playerTag}/verifytoken`.
///
/// ```json
/// { "tag": "#2PP", "token": "abc123", "status": "ok" }
/// ```
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Tag of the verified player.
    #[serde(default)]
    pub tag: Option<String>,
    /// `ok` when the token matches the player, `invalid` otherwise.
    pub status: String,
}

impl VerificationResult {
    /// Whether the API confirmed the ownership.
    pub fn is_verified(&self) -> bool {
        self.status == "ok"
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "tag={:?}, status={}", self.tag, self.status)
    }
}
