//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod hash_passphrase;
pub mod migrate;
pub mod serve;
