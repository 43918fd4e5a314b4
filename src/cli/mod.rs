//! Command-line interface for track-resolver.
//!
//! This module provides CLI commands for classifying and resolving music
//! references and for managing the config file.

mod commands;

pub use commands::{Cli, Commands, ConfigAction, run_command};
