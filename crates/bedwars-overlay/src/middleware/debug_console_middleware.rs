//! Debug Console Middleware
//!
//! Manages the tail of our own log file with its own polling thread:
//! - Start polling when the debug console is opened
//! - Polling thread dispatches new lines at regular intervals
//! - Stop polling thread when the console is closed; the read position is
//!   kept so reopening continues where it left off

use crate::actions::{Action, DebugConsoleAction};
use crate::dispatcher::Dispatcher;
use crate::log_tail::{LogTail, StartAt};
use crate::middleware::Middleware;
use crate::state::AppState;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Middleware for managing debug console log reading
pub struct DebugConsoleMiddleware {
    log_file: PathBuf,
    action_tx: Sender<Action>,
    /// Tail parked while the console is closed
    tail: Option<LogTail>,
    /// Flag to signal polling thread to stop
    polling_active: Arc<AtomicBool>,
    /// Handle to the polling thread; hands the tail back when it ends
    poll_thread: Option<JoinHandle<Option<LogTail>>>,
}

impl DebugConsoleMiddleware {
    pub fn new(log_file: PathBuf, action_tx: Sender<Action>) -> Self {
        Self {
            log_file,
            action_tx,
            tail: None,
            polling_active: Arc::new(AtomicBool::new(false)),
            poll_thread: None,
        }
    }

    /// Start the polling thread
    fn start_polling(&mut self) {
        if self.poll_thread.is_some() {
            return;
        }

        let mut tail = match self.tail.take() {
            Some(tail) => tail,
            None => match LogTail::open(&self.log_file, StartAt::Beginning) {
                Ok(tail) => tail,
                Err(e) => {
                    log::warn!("Failed to read log file {}: {}", self.log_file.display(), e);
                    return;
                }
            },
        };

        self.polling_active.store(true, Ordering::Relaxed);
        let polling_active = Arc::clone(&self.polling_active);
        let action_tx = self.action_tx.clone();

        let spawned = thread::Builder::new()
            .name("debug-console".to_string())
            .spawn(move || {
                while polling_active.load(Ordering::Relaxed) {
                    match tail.poll_lines() {
                        Ok(lines) if !lines.is_empty() => {
                            let update =
                                Action::DebugConsole(DebugConsoleAction::LinesAppended(lines));
                            if action_tx.send(update).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            log::warn!("Debug console stopped reading: {}", e);
                            return None;
                        }
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Some(tail)
            });

        match spawned {
            Ok(handle) => self.poll_thread = Some(handle),
            Err(e) => log::error!("Failed to spawn debug console thread: {}", e),
        }
    }

    /// Stop the polling thread
    fn stop_polling(&mut self) {
        // Signal thread to stop
        self.polling_active.store(false, Ordering::Relaxed);

        // Wait for thread to finish and keep its position
        if let Some(handle) = self.poll_thread.take() {
            self.tail = handle.join().ok().flatten();
        }
    }
}

impl Drop for DebugConsoleMiddleware {
    fn drop(&mut self) {
        self.stop_polling();
    }
}

impl Middleware for DebugConsoleMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::DebugConsole(DebugConsoleAction::Toggle) = action {
            // `state` is from before the toggle
            if state.debug_console.visible {
                self.stop_polling();
            } else {
                self.start_polling();
            }
        }
        true
    }
}
