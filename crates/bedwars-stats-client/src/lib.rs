//! Bedwars statistics client
//!
//! Resolves a Minecraft username to its UUID and fetches the player's Bedwars
//! counters, reduced into the figures the overlay displays.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            StatsFetcher<A>               │
//! │  - get_stats(name) -> Option<PlayerStats>│
//! │  - set_api_key(key)                      │
//! └──────────────────────────────────────────┘
//!                      │ uses
//!                      ▼
//! ┌──────────────────────────────────────────┐
//! │            StatsApi trait                │
//! │  - fetch_player_uuid()                   │
//! │  - fetch_bedwars_stats()                 │
//! └──────────────────────────────────────────┘
//!                      │
//!                      ▼
//!            ┌──────────────────┐
//!            │  HypixelClient   │
//!            │  (reqwest)       │
//!            └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bedwars_stats_client::{HypixelClient, StatsFetcher};
//!
//! # async fn example() -> Result<(), bedwars_stats_client::StatsError> {
//! let fetcher = StatsFetcher::new(HypixelClient::new()?, "my-api-key");
//! if let Some(stats) = fetcher.get_stats("Technoblade").await {
//!     println!("{} FKDR {}", stats.name, stats.fkdr);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod fetcher;
pub mod format;
pub mod hypixel_client;
pub mod types;

pub use client::{BedwarsLookup, StatsApi, StatsError};
pub use fetcher::StatsFetcher;
pub use format::group_thousands;
pub use hypixel_client::HypixelClient;
pub use types::{BedwarsTotals, PlayerStats, Ratio, Stat, SUB_MODES};
