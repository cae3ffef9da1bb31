//! HTTP request handlers.

pub mod auth_handler;
pub mod company_handler;
pub mod product_handler;
pub mod public_handler;
pub mod upload_handler;

pub use auth_handler::{auth_routes, session_routes};
pub use company_handler::company_routes;
pub use product_handler::product_routes;
pub use public_handler::public_routes;
pub use upload_handler::upload_routes;
