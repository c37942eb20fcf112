//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware chain,
//! it uses the Dispatcher. Queued actions are processed by the store right after the
//! action that produced them, before anything else arrives on the app channel.
//!
//! This enables patterns like:
//! - Watcher::LineRead is classified into Roster::Added
//! - Roster::Added flows through middleware and starts a stats lookup

use crate::actions::Action;
use std::cell::RefCell;

/// Dispatcher for sending actions through the middleware chain
///
/// Actions dispatched here re-enter the middleware chain from the beginning,
/// allowing middleware to trigger other middleware handlers.
#[derive(Default)]
pub struct Dispatcher {
    pending: RefCell<Vec<Action>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        self.pending.borrow_mut().push(action);
    }

    /// Take every queued action, oldest first
    pub fn drain(&self) -> Vec<Action> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }
}
