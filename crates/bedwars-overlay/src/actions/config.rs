//! Configuration actions

use bedwars_overlay_config::AppConfig;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// A new configuration takes effect
    ///
    /// Middleware sees the previous config in `AppState::config`; the reducer
    /// replaces it afterwards.
    Applied(AppConfig),
}
