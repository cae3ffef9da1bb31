//! GTIN Catalog - company and GTIN product catalog service
//!
//! An admin-managed directory of companies and their GTIN-identified
//! products, exposed through a public lookup API and a cookie-protected
//! admin API.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Companies, products, GTINs and the admin passphrase
//! - **services**: Application use cases and business logic
//! - **infra**: Database, migrations, repositories and image storage
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Hash the admin passphrase
//! cargo run -- hash-passphrase 'correct horse battery staple'
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{validate_gtin, Company, Gtin, Product};
pub use errors::{AppError, AppResult};
