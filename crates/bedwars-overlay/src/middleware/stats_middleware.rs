//! Stats Middleware
//!
//! Starts a stats lookup for every row added to the roster. Lookups run as
//! tasks on a tokio runtime owned by this middleware and report back over the
//! app channel, tagged with the row's `EntryId`.

use crate::actions::{Action, ConfigAction, RosterAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::EntryId;
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::{Context, Result};
use bedwars_stats_client::{StatsApi, StatsFetcher};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::Semaphore;

/// Lookups allowed in flight at once
const MAX_CONCURRENT_LOOKUPS: usize = 8;

pub struct StatsMiddleware<A> {
    /// Tokio runtime for async operations
    runtime: Runtime,
    fetcher: Arc<StatsFetcher<A>>,
    permits: Arc<Semaphore>,
    action_tx: Sender<Action>,
}

impl<A: StatsApi + 'static> StatsMiddleware<A> {
    pub fn new(api: A, api_key: &str, action_tx: Sender<Action>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("stats-lookup")
            .build()
            .context("Failed to create tokio runtime")?;

        Ok(Self {
            runtime,
            fetcher: Arc::new(StatsFetcher::new(api, api_key)),
            permits: Arc::new(Semaphore::new(MAX_CONCURRENT_LOOKUPS)),
            action_tx,
        })
    }

    fn spawn_lookup(&self, id: EntryId, name: String) {
        let fetcher = Arc::clone(&self.fetcher);
        let permits = Arc::clone(&self.permits);
        let action_tx = self.action_tx.clone();

        self.runtime.spawn(async move {
            let Ok(_permit) = permits.acquire_owned().await else {
                return;
            };

            let stats = fetcher.get_stats(&name).await;
            if stats.is_none() {
                log::warn!("No stats for {}, showing name only", name);
            }

            if action_tx
                .send(Action::Roster(RosterAction::StatsResolved { id, stats }))
                .is_err()
            {
                log::debug!("App channel closed, dropping stats for {}", name);
            }
        });
    }
}

impl<A: StatsApi + 'static> Middleware for StatsMiddleware<A> {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Roster(RosterAction::Added { id, name }) => {
                self.spawn_lookup(*id, name.clone());
                true
            }

            Action::Config(ConfigAction::Applied(new_config))
                if new_config.api_key != state.config.api_key =>
            {
                self.fetcher.set_api_key(new_config.api_key.clone());
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bedwars_overlay_config::AppConfig;
    use bedwars_stats_client::{BedwarsLookup, StatsError};
    use serde_json::json;
    use std::sync::mpsc::{self, Receiver};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Knows "Alice" with some stats; everybody else does not exist
    #[derive(Default)]
    struct FakeApi {
        keys_seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl StatsApi for FakeApi {
        async fn fetch_player_uuid(&self, name: &str) -> Result<String, StatsError> {
            match name {
                "Alice" => Ok("alice-uuid".to_string()),
                _ => Err(StatsError::PlayerNotFound {
                    name: name.to_string(),
                    status: 404,
                }),
            }
        }

        async fn fetch_bedwars_stats(
            &self,
            _uuid: &str,
            api_key: &str,
        ) -> Result<BedwarsLookup, StatsError> {
            self.keys_seen.lock().unwrap().push(api_key.to_string());
            let raw = json!({
                "eight_one_final_kills_bedwars": 10,
                "eight_one_final_deaths_bedwars": 7,
            });
            Ok(BedwarsLookup::Found(raw.as_object().unwrap().clone()))
        }
    }

    fn resolved(rx: &Receiver<Action>) -> (EntryId, Option<bedwars_stats_client::PlayerStats>) {
        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(Action::Roster(RosterAction::StatsResolved { id, stats })) => (id, stats),
            other => panic!("expected StatsResolved, got {:?}", other),
        }
    }

    fn added(id: u64, name: &str) -> Action {
        Action::Roster(RosterAction::Added {
            id: EntryId::new(id),
            name: name.to_string(),
        })
    }

    #[test]
    fn test_added_row_gets_stats() {
        let (tx, rx) = mpsc::channel();
        let mut middleware = StatsMiddleware::new(FakeApi::default(), "key", tx).unwrap();

        middleware.handle(&added(3, "Alice"), &AppState::default(), &Dispatcher::new());

        let (id, stats) = resolved(&rx);
        assert_eq!(id, EntryId::new(3));
        let stats = stats.unwrap();
        assert_eq!(stats.name, "Alice");
        assert_eq!(stats.fkdr.to_string(), "1.43");
    }

    #[test]
    fn test_unknown_player_resolves_to_none() {
        let (tx, rx) = mpsc::channel();
        let mut middleware = StatsMiddleware::new(FakeApi::default(), "key", tx).unwrap();

        middleware.handle(&added(5, "Nobody"), &AppState::default(), &Dispatcher::new());

        assert_eq!(resolved(&rx), (EntryId::new(5), None));
    }

    #[test]
    fn test_applied_api_key_is_used_for_next_lookup() {
        let (tx, rx) = mpsc::channel();
        let api = FakeApi::default();
        let keys_seen = Arc::clone(&api.keys_seen);
        let mut middleware = StatsMiddleware::new(api, "old", tx).unwrap();
        let state = AppState::default();

        let new_config = AppConfig {
            api_key: "new".to_string(),
            ..state.config.clone()
        };
        middleware.handle(
            &Action::Config(ConfigAction::Applied(new_config)),
            &state,
            &Dispatcher::new(),
        );
        middleware.handle(&added(0, "Alice"), &state, &Dispatcher::new());
        resolved(&rx);

        assert_eq!(*keys_seen.lock().unwrap(), vec!["new".to_string()]);
    }
}
