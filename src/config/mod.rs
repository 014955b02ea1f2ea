//! Configuration module for Pocketbook
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PocketbookPaths;
pub use settings::Settings;
