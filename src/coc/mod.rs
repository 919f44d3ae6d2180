//! Clash of Clans API integration.
//!
//! # Modules
//!
//! - `requester` - HTTP client for player lookup and ownership verification
//! - `response_structs` - Data structures for API requests and responses
//!
//! # Examples
//!
//! ```no_run
//! let requester = CocRequester::new(&config.coc)?;
//! let stats = requester.lookup_player("#2PP").await?;
//! ```

mod requester;
mod response_structs;

#[cfg(test)]
pub use crate::coc::requester::MockRequester;
#[cfg(test)]
pub use crate::coc::response_structs::{PlayerClan, VerificationResult};
pub use crate::coc::requester::{CocRequester, Requester};
pub use crate::coc::response_structs::PlayerStats;
