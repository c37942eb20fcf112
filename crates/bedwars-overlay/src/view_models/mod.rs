//! View Models
//!
//! View models sit between state and views: they pre-compute display text,
//! ordering and colours so views only lay things out.

mod debug_console_view_model;
mod roster_view_model;

pub use debug_console_view_model::{DebugConsoleViewModel, LogLevel};
pub use roster_view_model::{RosterTableViewModel, FKDR_COLUMN};
