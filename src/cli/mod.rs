//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod limit;
pub mod report;
pub mod show;

pub use limit::{handle_limit_command, LimitCommands};
pub use report::handle_summary_command;
pub use show::{format_dashboard, handle_show_command};
