//! reqwest-based implementation of `StatsApi`
//!
//! Talks to the Mojang profile directory for UUIDs and to the Hypixel
//! public API for player stats. No caching, no retries.

use crate::client::{BedwarsLookup, StatsApi, StatsError};
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Default base URL of the username -> UUID directory
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://api.mojang.com";

/// Default base URL of the stats API
pub const DEFAULT_STATS_BASE_URL: &str = "https://api.hypixel.net";

const USER_AGENT: &str = concat!("bedwars-overlay/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    id: String,
}

/// Direct API client
#[derive(Debug, Clone)]
pub struct HypixelClient {
    http: reqwest::Client,
    profile_base_url: String,
    stats_base_url: String,
}

impl HypixelClient {
    /// Create a client against the public endpoints
    pub fn new() -> Result<Self, StatsError> {
        Self::with_base_urls(DEFAULT_PROFILE_BASE_URL, DEFAULT_STATS_BASE_URL)
    }

    /// Create a client against alternative endpoints (mirrors, proxies)
    pub fn with_base_urls(
        profile_base_url: impl Into<String>,
        stats_base_url: impl Into<String>,
    ) -> Result<Self, StatsError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            profile_base_url: profile_base_url.into().trim_end_matches('/').to_string(),
            stats_base_url: stats_base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl StatsApi for HypixelClient {
    async fn fetch_player_uuid(&self, player_name: &str) -> Result<String, StatsError> {
        let url = format!(
            "{}/users/profiles/minecraft/{}",
            self.profile_base_url, player_name
        );
        debug!("Resolving UUID for {}", player_name);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(StatsError::PlayerNotFound {
                name: player_name.to_string(),
                status: status.as_u16(),
            });
        }

        let profile: ProfileResponse = response.json().await?;
        Ok(profile.id)
    }

    async fn fetch_bedwars_stats(
        &self,
        player_uuid: &str,
        api_key: &str,
    ) -> Result<BedwarsLookup, StatsError> {
        let url = format!("{}/player", self.stats_base_url);
        debug!("Fetching Bedwars stats for {}", player_uuid);

        let response = self
            .http
            .get(&url)
            .query(&[("key", api_key), ("uuid", player_uuid)])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body: Value = response.json().await?;
                extract_bedwars_stats(body).map(BedwarsLookup::Found)
            }
            StatusCode::NOT_FOUND => Ok(BedwarsLookup::NoHistory),
            other => Err(StatsError::UnexpectedStatus(other.as_u16())),
        }
    }
}

/// Pull `player.stats.Bedwars` out of a 200 response body
///
/// An empty Bedwars object counts as "no Bedwars stats".
fn extract_bedwars_stats(body: Value) -> Result<Map<String, Value>, StatsError> {
    let success = body
        .get("success")
        .and_then(Value::as_bool)
        .ok_or(StatsError::MissingField("success"))?;
    if !success {
        return Err(StatsError::Unsuccessful);
    }

    let Value::Object(mut root) = body else {
        return Err(StatsError::MissingField("player"));
    };

    match root.remove("player") {
        Some(Value::Object(mut player)) => match player.remove("stats") {
            Some(Value::Object(mut stats)) => match stats.remove("Bedwars") {
                Some(Value::Object(bedwars)) if !bedwars.is_empty() => Ok(bedwars),
                _ => Err(StatsError::NoBedwarsStats),
            },
            _ => Err(StatsError::NoBedwarsStats),
        },
        // `player: null` means the UUID never logged in to the server
        _ => Err(StatsError::NoBedwarsStats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::StatsFetcher;
    use crate::types::PlayerStats;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// A canned answer for requests whose target contains `needle`
    #[derive(Clone, Copy)]
    struct Route {
        needle: &'static str,
        status: u16,
        body: &'static str,
    }

    /// Serve `routes` on a local port, returning the base URL
    async fn serve(routes: Vec<Route>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        let read = socket.read(&mut buf).await.unwrap();
                        if read == 0 {
                            return;
                        }
                        request.extend_from_slice(&buf[..read]);
                    }

                    let request = String::from_utf8_lossy(&request);
                    let target = request.split_whitespace().nth(1).unwrap_or("/");
                    let (status, body) = routes
                        .iter()
                        .find(|route| target.contains(route.needle))
                        .map(|route| (route.status, route.body))
                        .unwrap_or((500, ""));

                    let response = format!(
                        "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    socket.write_all(response.as_bytes()).await.unwrap();
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    async fn local_client() -> HypixelClient {
        let profiles = serve(vec![
            Route {
                needle: "/users/profiles/minecraft/Notch",
                status: 200,
                body: r#"{"id":"uuid-found","name":"Notch"}"#,
            },
            Route {
                needle: "/users/profiles/minecraft/Fresh",
                status: 200,
                body: r#"{"id":"uuid-fresh","name":"Fresh"}"#,
            },
            Route {
                needle: "/users/profiles/minecraft/Ghost",
                status: 204,
                body: "",
            },
        ])
        .await;
        let stats = serve(vec![
            Route {
                needle: "uuid=uuid-found",
                status: 200,
                body: r#"{"success":true,"player":{"stats":{"Bedwars":{"eight_one_wins_bedwars":3}}}}"#,
            },
            Route {
                needle: "uuid=uuid-fresh",
                status: 404,
                body: r#"{"success":false}"#,
            },
            Route {
                needle: "uuid=uuid-banned",
                status: 403,
                body: r#"{"success":false,"cause":"Invalid API key"}"#,
            },
        ])
        .await;
        HypixelClient::with_base_urls(profiles, stats).unwrap()
    }

    #[tokio::test]
    async fn test_profile_status_mapping() {
        let client = local_client().await;

        assert_eq!(client.fetch_player_uuid("Notch").await.unwrap(), "uuid-found");
        assert!(matches!(
            client.fetch_player_uuid("Ghost").await,
            Err(StatsError::PlayerNotFound { status: 204, .. })
        ));
    }

    #[tokio::test]
    async fn test_stats_status_mapping() {
        let client = local_client().await;

        match client.fetch_bedwars_stats("uuid-found", "key").await {
            Ok(BedwarsLookup::Found(raw)) => {
                assert_eq!(raw.get("eight_one_wins_bedwars"), Some(&json!(3)));
            }
            other => panic!("expected Found, got {:?}", other),
        }
        assert!(matches!(
            client.fetch_bedwars_stats("uuid-fresh", "key").await,
            Ok(BedwarsLookup::NoHistory)
        ));
        assert!(matches!(
            client.fetch_bedwars_stats("uuid-banned", "key").await,
            Err(StatsError::UnexpectedStatus(403))
        ));
    }

    #[tokio::test]
    async fn test_player_without_history_gets_unknown_stats() {
        let fetcher = StatsFetcher::new(local_client().await, "key");

        assert_eq!(
            fetcher.get_stats("Fresh").await,
            Some(PlayerStats::unknown("Fresh"))
        );
        assert_eq!(fetcher.get_stats("Ghost").await, None);
    }

    #[test]
    fn test_extract_bedwars_stats() {
        let body = json!({
            "success": true,
            "player": {
                "displayname": "Notch",
                "stats": {
                    "Bedwars": { "eight_one_wins_bedwars": 3 },
                    "SkyWars": { "wins": 10 }
                }
            }
        });
        let bedwars = extract_bedwars_stats(body).unwrap();
        assert_eq!(bedwars.get("eight_one_wins_bedwars"), Some(&json!(3)));
    }

    #[test]
    fn test_extract_unsuccessful() {
        let body = json!({ "success": false, "cause": "Invalid API key" });
        assert!(matches!(
            extract_bedwars_stats(body),
            Err(StatsError::Unsuccessful)
        ));
    }

    #[test]
    fn test_extract_missing_success_flag() {
        assert!(matches!(
            extract_bedwars_stats(json!({ "player": {} })),
            Err(StatsError::MissingField("success"))
        ));
    }

    #[test]
    fn test_extract_without_bedwars() {
        let cases = [
            json!({ "success": true, "player": null }),
            json!({ "success": true, "player": { "stats": {} } }),
            json!({ "success": true, "player": { "stats": { "Bedwars": {} } } }),
            json!({ "success": true, "player": { "displayname": "x" } }),
        ];
        for body in cases {
            assert!(matches!(
                extract_bedwars_stats(body),
                Err(StatsError::NoBedwarsStats)
            ));
        }
    }

    #[test]
    fn test_base_urls_are_normalized() {
        let client = HypixelClient::with_base_urls("http://localhost:8080/", "http://stats/").unwrap();
        assert_eq!(client.profile_base_url, "http://localhost:8080");
        assert_eq!(client.stats_base_url, "http://stats");
    }
}
