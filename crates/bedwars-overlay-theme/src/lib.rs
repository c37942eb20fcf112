//! Colours and prebuilt styles for bedwars-overlay

mod fkdr;
mod theme;

pub use fkdr::{fkdr_color, FkdrBand};
pub use theme::Theme;
