//! Log Watcher Middleware
//!
//! Owns the thread that tails the Minecraft client log:
//! - Start polling when `Watcher::Start` is dispatched
//! - Restart at the new file's end when the applied config changes how the
//!   log is read
//! - Stop the polling thread on drop

use crate::actions::{Action, ConfigAction, WatcherAction};
use crate::dispatcher::Dispatcher;
use crate::log_tail::{LogTail, StartAt};
use crate::middleware::Middleware;
use crate::state::AppState;
use bedwars_log_parser::is_relevant;
use bedwars_overlay_config::AppConfig;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How the log file is read; a change means the watcher restarts
#[derive(Debug, Clone, PartialEq, Eq)]
struct WatchSettings {
    path: PathBuf,
    interval: Duration,
    chat_only: bool,
}

impl WatchSettings {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            path: config.log_path(),
            interval: config.poll_interval(),
            chat_only: config.filter_chat_lines,
        }
    }
}

/// Middleware for managing the log watcher thread
pub struct LogWatcherMiddleware {
    action_tx: Sender<Action>,
    /// Flag to signal the polling thread to stop
    stop_flag: Arc<AtomicBool>,
    /// Handle to the polling thread
    watch_thread: Option<JoinHandle<()>>,
}

impl LogWatcherMiddleware {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self {
            action_tx,
            stop_flag: Arc::new(AtomicBool::new(false)),
            watch_thread: None,
        }
    }

    /// Start the polling thread, stopping any previous one first
    fn start(&mut self, settings: WatchSettings) {
        self.stop();

        let stop_flag = Arc::new(AtomicBool::new(false));
        self.stop_flag = Arc::clone(&stop_flag);
        let action_tx = self.action_tx.clone();

        let spawned = thread::Builder::new()
            .name("log-watcher".to_string())
            .spawn(move || watch(settings, action_tx, stop_flag));

        match spawned {
            Ok(handle) => self.watch_thread = Some(handle),
            Err(e) => log::error!("Failed to spawn log watcher thread: {}", e),
        }
    }

    /// Stop the polling thread
    fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);

        if let Some(handle) = self.watch_thread.take() {
            if handle.join().is_err() {
                log::error!("Log watcher thread panicked");
            }
        }
    }
}

impl Drop for LogWatcherMiddleware {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Middleware for LogWatcherMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Watcher(WatcherAction::Start) => {
                self.start(WatchSettings::from_config(&state.config));
                true
            }

            // `state.config` is still the previous config here
            Action::Config(ConfigAction::Applied(new_config)) => {
                if WatchSettings::from_config(new_config) != WatchSettings::from_config(&state.config)
                {
                    log::info!("Log settings changed, restarting watcher");
                    dispatcher.dispatch(Action::Watcher(WatcherAction::Start));
                }
                true
            }

            _ => true,
        }
    }
}

/// Polling loop run on the watcher thread
///
/// Opening failures and read errors end the loop; nothing is retried.
fn watch(settings: WatchSettings, action_tx: Sender<Action>, stop_flag: Arc<AtomicBool>) {
    let WatchSettings {
        path,
        interval,
        chat_only,
    } = settings;

    let report_failure = |error: std::io::Error| {
        log::error!("Watching {} failed: {}", path.display(), error);
        let _ = action_tx.send(Action::Watcher(WatcherAction::Failed {
            path: path.clone(),
            error: error.to_string(),
        }));
    };

    let tail = match LogTail::open(&path, StartAt::End) {
        Ok(tail) => tail,
        Err(e) => {
            report_failure(e);
            return;
        }
    };

    log::info!(
        "Watching {} every {}ms",
        path.display(),
        interval.as_millis()
    );
    if action_tx
        .send(Action::Watcher(WatcherAction::Started(path.clone())))
        .is_err()
    {
        return;
    }

    let mut lines = tail.into_lines(interval).until(stop_flag);
    for line in lines.by_ref() {
        if chat_only && !is_relevant(&line) {
            continue;
        }
        if action_tx
            .send(Action::Watcher(WatcherAction::LineRead(line)))
            .is_err()
        {
            log::debug!("App channel closed, stopping log watcher");
            return;
        }
    }

    match lines.take_error() {
        Some(e) => report_failure(e),
        None => log::debug!("Stopped watching {}", path.display()),
    }
}
