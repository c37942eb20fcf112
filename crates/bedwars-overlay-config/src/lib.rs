//! Configuration and file management for bedwars-overlay
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file discovery (local file first, then global)
//! - Application configuration (AppConfig) with TOML load/save

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, API_KEY_ENV};
pub use config_file::{load_config_file, writable_config_path};
pub use paths::{app_config_path, cache_dir, config_dir, default_minecraft_log_path};
