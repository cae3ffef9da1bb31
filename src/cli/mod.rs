//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `hash-passphrase` - Produce the admin passphrase hash

pub mod args;

pub use args::{Cli, Commands};
