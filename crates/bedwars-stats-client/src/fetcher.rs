//! Player stats lookup
//!
//! Combines the UUID lookup and the stats lookup into one operation and
//! reduces the raw counters into `PlayerStats`.

use crate::client::{BedwarsLookup, StatsApi};
use crate::types::{BedwarsTotals, PlayerStats};
use log::{info, warn};
use std::sync::RwLock;

/// Fetches display stats for a player through a `StatsApi`
///
/// The API key can be swapped at runtime; lookups already in flight keep the
/// key they started with.
pub struct StatsFetcher<A> {
    api: A,
    api_key: RwLock<String>,
}

impl<A: StatsApi> StatsFetcher<A> {
    pub fn new(api: A, api_key: impl Into<String>) -> Self {
        Self {
            api,
            api_key: RwLock::new(api_key.into()),
        }
    }

    /// Replace the API key used by subsequent lookups
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        match self.api_key.write() {
            Ok(mut guard) => {
                *guard = api_key.into();
                info!("Stats API key updated");
            }
            Err(e) => warn!("Failed to update API key: {}", e),
        }
    }

    fn current_api_key(&self) -> String {
        self.api_key
            .read()
            .map(|key| key.clone())
            .unwrap_or_default()
    }

    /// Look up a player's stats
    ///
    /// - `None`: the name could not be resolved or the stats lookup failed
    /// - all-unknown stats: the stats endpoint has no history for the player
    /// - otherwise: counters summed over the four sub-modes
    ///
    /// Both requests are issued on every call; nothing is cached.
    pub async fn get_stats(&self, player_name: &str) -> Option<PlayerStats> {
        info!("Fetching stats for {}", player_name);

        let uuid = match self.api.fetch_player_uuid(player_name).await {
            Ok(uuid) => uuid,
            Err(e) => {
                warn!("UUID not found for {}: {}", player_name, e);
                return None;
            }
        };

        let api_key = self.current_api_key();
        match self.api.fetch_bedwars_stats(&uuid, &api_key).await {
            Ok(BedwarsLookup::Found(raw)) => {
                let totals = BedwarsTotals::from_raw(&raw);
                Some(PlayerStats::from_totals(player_name, &totals))
            }
            Ok(BedwarsLookup::NoHistory) => {
                info!("No Bedwars history for {}, marking all stats unknown", player_name);
                Some(PlayerStats::unknown(player_name))
            }
            Err(e) => {
                warn!("Failed to fetch Bedwars stats for {}: {}", player_name, e);
                None
            }
        }
    }
}
