//! Configuration module for TrackIt
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackItPaths;
pub use settings::Settings;
