//! Service Container - Centralized service access.
//!
//! Handlers depend on the service traits only; the container wires the
//! concrete implementations to the database and the upload directory.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CompanyManager, CompanyService, ImageManager, ImageService,
    ProductManager, ProductService,
};
use crate::config::Config;
use crate::infra::{LocalImageStore, Persistence};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get company service
    fn companies(&self) -> Arc<dyn CompanyService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get image upload service
    fn images(&self) -> Arc<dyn ImageService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    company_service: Arc<dyn CompanyService>,
    product_service: Arc<dyn ProductService>,
    image_service: Arc<dyn ImageService>,
}

impl Services {
    /// Create a service container from already-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        company_service: Arc<dyn CompanyService>,
        product_service: Arc<dyn ProductService>,
        image_service: Arc<dyn ImageService>,
    ) -> Self {
        Self {
            auth_service,
            company_service,
            product_service,
            image_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let store = Arc::new(LocalImageStore::new(&config.upload_dir));

        Self {
            auth_service: Arc::new(Authenticator::from_config(config)),
            company_service: Arc::new(CompanyManager::new(uow.clone())),
            product_service: Arc::new(ProductManager::new(uow)),
            image_service: Arc::new(ImageManager::new(store)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyService> {
        self.company_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn images(&self) -> Arc<dyn ImageService> {
        self.image_service.clone()
    }
}
