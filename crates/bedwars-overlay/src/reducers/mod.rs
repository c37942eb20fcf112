pub mod app_reducer;
pub mod debug_console_reducer;
pub mod roster_reducer;
pub mod settings_reducer;
pub mod watcher_reducer;
