//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod company_repository;
pub(crate) mod entities;
mod product_repository;

pub use company_repository::{CompanyRepository, CompanyStore};
pub use product_repository::{ProductRepository, ProductStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use company_repository::MockCompanyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
