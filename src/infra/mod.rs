//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, migrations and repositories
//! - Unit of Work for transaction management
//! - Image file storage

pub mod db;
pub mod repositories;
pub mod storage;
pub mod unit_of_work;

pub use db::{Database, MigrationState, Migrator};
pub use repositories::{CompanyRepository, CompanyStore, ProductRepository, ProductStore};
pub use storage::{ImageStore, LocalImageStore};
pub use unit_of_work::{
    Persistence, TransactionContext, TxCompanyRepository, TxFuture, TxProductRepository,
    UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCompanyRepository, MockProductRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use storage::MockImageStore;
#[cfg(any(test, feature = "test-utils"))]
pub use unit_of_work::{MockTxCompanyRepository, MockTxProductRepository};
