//! Configuration and file management for zilla
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) with environment fallback

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, CacheConfig, CachePolicy, JiraConfig, MIN_SPINNER_INTERVAL_MS};
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir, issue_cache_path};
