//! Bedwars Log Parser
//!
//! Turns raw Minecraft client log lines into lobby events:
//! - a player joined the lobby (`<name> has joined (x/y)!`)
//! - a player left the lobby (`<name> has quit!`)
//! - a roster snapshot from `/who` (`ONLINE: a, b, c`)
//!
//! # Example
//!
//! ```
//! use bedwars_log_parser::{classify, LineEvent};
//!
//! let line = "[12:01:44] [Client thread/INFO]: [CHAT] Notch has joined (3/8)!";
//! assert_eq!(classify(line), Some(LineEvent::Joined("Notch".to_string())));
//! ```

mod classifier;
mod types;

pub use classifier::{classify, is_relevant, CHAT_MARKER};
pub use types::LineEvent;
