//! Domain models
//!
//! Core business types, independent of how they are rendered.

mod roster;

pub use roster::{
    plan_changes, EntryId, FetchStatus, Roster, RosterChange, RosterEntry, SelfIdentity,
};
