//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns the transaction lifecycle.
//! Multi-statement admin sequences (product creation) run through
//! [`UnitOfWork::transaction`] so their checks and writes commit together.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};
use std::sync::Arc;

use super::repositories::entities::company::{self, Entity as CompanyEntity};
use super::repositories::entities::product::{self, ActiveModel as ProductActiveModel};
use super::repositories::{CompanyRepository, CompanyStore, ProductRepository, ProductStore};
use crate::config::DUPLICATE_GTIN_MESSAGE;
use crate::domain::{Company, CompanyStatus, NewProduct, Product, ProductStatus};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by transaction closures
pub type TxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock the repositories (including the transaction-scoped
/// ones) behind a stub implementation.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get company repository
    fn companies(&self) -> Arc<dyn CompanyRepository>;

    /// Get product repository
    fn products(&self) -> Arc<dyn ProductRepository>;

    /// Execute a closure within a ReadCommitted transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    companies: &'a dyn TxCompanyRepository,
    products: &'a dyn TxProductRepository,
}

impl<'a> TransactionContext<'a> {
    pub fn new(companies: &'a dyn TxCompanyRepository, products: &'a dyn TxProductRepository) -> Self {
        Self {
            companies,
            products,
        }
    }

    /// Get company repository for this transaction
    pub fn companies(&self) -> &'a dyn TxCompanyRepository {
        self.companies
    }

    /// Get product repository for this transaction
    pub fn products(&self) -> &'a dyn TxProductRepository {
        self.products
    }
}

/// Company queries that take part in the surrounding transaction
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait TxCompanyRepository: Send + Sync {
    /// Find an ACTIVE company and hold a shared row lock on it until commit,
    /// so a concurrent status change waits for this transaction.
    async fn find_active_for_share(&self, id: i32) -> AppResult<Option<Company>>;
}

/// Product queries that take part in the surrounding transaction
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait TxProductRepository: Send + Sync {
    async fn exists(&self, gtin: &str) -> AppResult<bool>;

    /// Insert a SHOW product owned by `company_id`.
    ///
    /// A unique violation is reported as the duplicate-GTIN conflict.
    async fn insert(&self, new: NewProduct, company_id: i32) -> AppResult<Product>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    company_repo: Arc<CompanyStore>,
    product_repo: Arc<ProductStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        let company_repo = Arc::new(CompanyStore::new(db.clone()));
        let product_repo = Arc::new(ProductStore::new(db.clone()));
        Self {
            db,
            company_repo,
            product_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.company_repo.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await?;

        let companies = TxCompanyStore { txn: &txn };
        let products = TxProductStore { txn: &txn };
        let outcome = f(TransactionContext::new(&companies, &products)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

struct TxCompanyStore<'t> {
    txn: &'t DatabaseTransaction,
}

#[async_trait]
impl TxCompanyRepository for TxCompanyStore<'_> {
    async fn find_active_for_share(&self, id: i32) -> AppResult<Option<Company>> {
        let model = CompanyEntity::find_by_id(id)
            .filter(company::Column::Status.eq(CompanyStatus::Active.as_str()))
            .lock_shared()
            .one(self.txn)
            .await?;

        Ok(model.map(Company::from))
    }
}

struct TxProductStore<'t> {
    txn: &'t DatabaseTransaction,
}

#[async_trait]
impl TxProductRepository for TxProductStore<'_> {
    async fn exists(&self, gtin: &str) -> AppResult<bool> {
        let count = product::Entity::find()
            .filter(product::Column::Gtin.eq(gtin))
            .count(self.txn)
            .await?;
        Ok(count > 0)
    }

    async fn insert(&self, new: NewProduct, company_id: i32) -> AppResult<Product> {
        let weight_unit = new.weight_unit_or_default();
        let model = ProductActiveModel {
            gtin: Set(new.gtin),
            company_id: Set(company_id),
            name: Set(new.name),
            name_french: Set(new.name_french),
            description: Set(new.description),
            description_french: Set(new.description_french),
            brand_name: Set(new.brand_name),
            country_of_origin: Set(new.country_of_origin),
            gross_weight_kg: Set(new.gross_weight_kg),
            net_weight_kg: Set(new.net_weight_kg),
            weight_unit: Set(weight_unit),
            image: Set(new.image),
            status: Set(ProductStatus::Show.as_str().to_string()),
        };

        let created = model
            .insert(self.txn)
            .await
            .map_err(|e| AppError::from_constraint(e, DUPLICATE_GTIN_MESSAGE))?;

        Ok(Product::from(created))
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
