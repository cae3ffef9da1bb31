//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! Catalog services use the Unit of Work pattern for centralized
//! repository access and transaction management.

mod auth_service;
mod company_service;
pub mod container;
mod image_service;
mod product_service;

#[cfg(test)]
mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, SessionToken};
pub use company_service::{CompanyManager, CompanyService};
pub use image_service::{is_safe_filename, ImageManager, ImageService, StoredImage};
pub use product_service::{ProductManager, ProductService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use company_service::MockCompanyService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use image_service::MockImageService;
#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
