use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

mod actions;
mod dispatcher;
mod domain_models;
mod log_tail;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction, WatcherAction};
use bedwars_overlay_config::AppConfig;
use bedwars_stats_client::HypixelClient;
use middleware::{
    app_config_middleware::AppConfigMiddleware, debug_console_middleware::DebugConsoleMiddleware,
    keyboard_middleware::KeyboardMiddleware, log_watcher_middleware::LogWatcherMiddleware,
    logging::LoggingMiddleware, roster_middleware::RosterMiddleware,
    stats_middleware::StatsMiddleware,
};
use state::AppState;
use store::Store;

/// Upper bound on background actions applied between two frames
const MAX_ACTIONS_PER_FRAME: usize = 256;

fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting bedwars-overlay");

    if let Err(e) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {}", e);
    }
    let config = AppConfig::load();
    if config.api_key.is_empty() {
        log::warn!("No API key configured, lookups will fail until one is set");
    }

    // Background producers (watcher thread, stats tasks, console tail) report here
    let (action_tx, action_rx) = mpsc::channel();

    let stats_api = HypixelClient::new().context("Failed to create HTTP client")?;

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(config.clone()));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(AppConfigMiddleware::new()));
    store.add_middleware(Box::new(LogWatcherMiddleware::new(action_tx.clone())));
    store.add_middleware(Box::new(RosterMiddleware::new()));
    store.add_middleware(Box::new(StatsMiddleware::new(
        stats_api,
        &config.api_key,
        action_tx.clone(),
    )?));
    store.add_middleware(Box::new(DebugConsoleMiddleware::new(log_file, action_tx)));

    store.dispatch(Action::Watcher(WatcherAction::Start));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store, &action_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stops the watcher and console threads
    drop(store);

    if let Err(err) = &result {
        eprintln!("Error: {:#}", err);
    }

    log::info!("Exiting bedwars-overlay");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    action_rx: &Receiver<Action>,
) -> Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Apply what the background producers reported since the last frame
        for action in action_rx.try_iter().take(MAX_ACTIONS_PER_FRAME) {
            store.dispatch(action);
        }

        // Handle events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
