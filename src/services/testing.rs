//! Test support for services backed by mocked repositories.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::AppResult;
use crate::infra::{
    CompanyRepository, MockCompanyRepository, MockProductRepository, MockTxCompanyRepository,
    MockTxProductRepository, ProductRepository, TransactionContext, TxFuture, UnitOfWork,
};

/// Unit of Work handing out mocked repositories.
///
/// Transactions run the closure against the mocked transaction-scoped
/// repositories; nothing is committed or rolled back.
pub struct StubUnitOfWork {
    companies: Arc<MockCompanyRepository>,
    products: Arc<MockProductRepository>,
    tx_companies: MockTxCompanyRepository,
    tx_products: MockTxProductRepository,
}

impl StubUnitOfWork {
    pub fn new(companies: MockCompanyRepository, products: MockProductRepository) -> Self {
        Self {
            companies: Arc::new(companies),
            products: Arc::new(products),
            tx_companies: MockTxCompanyRepository::new(),
            tx_products: MockTxProductRepository::new(),
        }
    }

    /// Repositories seen inside [`UnitOfWork::transaction`]
    pub fn with_tx_repositories(
        mut self,
        companies: MockTxCompanyRepository,
        products: MockTxProductRepository,
    ) -> Self {
        self.tx_companies = companies;
        self.tx_products = products;
        self
    }
}

#[async_trait]
impl UnitOfWork for StubUnitOfWork {
    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.companies.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        f(TransactionContext::new(&self.tx_companies, &self.tx_products)).await
    }
}
