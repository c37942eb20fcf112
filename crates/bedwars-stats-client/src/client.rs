//! Stats API trait and error definitions
//!
//! `StatsApi` is the seam between the fetch logic and the network. The
//! production implementation is `HypixelClient`; tests substitute fakes.

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Errors produced by a stats lookup
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The profile directory did not answer 200 for this name
    #[error("no profile for {name} (HTTP {status})")]
    PlayerNotFound { name: String, status: u16 },

    /// The stats endpoint answered with a status other than 200 or 404
    #[error("unexpected HTTP status {0} from stats endpoint")]
    UnexpectedStatus(u16),

    /// The stats endpoint answered 200 but flagged the request as failed
    #[error("stats endpoint reported success = false")]
    Unsuccessful,

    /// The player exists but has never played Bedwars
    #[error("player has no Bedwars stats")]
    NoBedwarsStats,

    /// A required field was missing from a JSON response
    #[error("missing field `{0}` in response")]
    MissingField(&'static str),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Outcome of a successful call to the stats endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum BedwarsLookup {
    /// Raw Bedwars counters keyed by their API names
    Found(Map<String, Value>),
    /// The endpoint answered 404: no ranked history for this player
    NoHistory,
}

/// Public API access needed to build a player's stats
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// between concurrently running fetch tasks.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Resolve a username to its UUID
    ///
    /// Any non-200 answer is reported as `StatsError::PlayerNotFound`.
    async fn fetch_player_uuid(&self, player_name: &str) -> Result<String, StatsError>;

    /// Fetch the Bedwars counters for a UUID using the caller's API key
    async fn fetch_bedwars_stats(
        &self,
        player_uuid: &str,
        api_key: &str,
    ) -> Result<BedwarsLookup, StatsError>;
}
