//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::{Config, DEFAULT_UPLOAD_DIR};
use crate::infra::Database;
use crate::services::{
    AuthService, CompanyService, ImageService, ProductService, ServiceContainer, Services,
};

/// HTTP-facing settings the handlers need besides the services.
#[derive(Clone, Debug)]
pub struct HttpSettings {
    /// Prefix for absolute pagination links; relative links when `None`
    pub public_base_url: Option<String>,
    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,
    /// Directory served under `/uploads`
    pub upload_dir: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            public_base_url: None,
            secure_cookies: false,
            upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
        }
    }
}

impl HttpSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            public_base_url: config.public_base_url.clone(),
            secure_cookies: config.secure_cookies,
            upload_dir: config.upload_dir.clone(),
        }
    }
}

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Admin authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Company service
    pub company_service: Arc<dyn CompanyService>,
    /// Product service
    pub product_service: Arc<dyn ProductService>,
    /// Image upload service
    pub image_service: Arc<dyn ImageService>,
    /// Database connection
    pub database: Arc<Database>,
    pub settings: HttpSettings,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.connection().clone(), config);
        Self::new(&container, database, HttpSettings::from_config(config))
    }

    /// Create application state from any service container.
    pub fn new(
        services: &dyn ServiceContainer,
        database: Arc<Database>,
        settings: HttpSettings,
    ) -> Self {
        Self {
            auth_service: services.auth(),
            company_service: services.companies(),
            product_service: services.products(),
            image_service: services.images(),
            database,
            settings,
        }
    }
}
