//! Product service - Public lookup/search and admin product management.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{DUPLICATE_GTIN_MESSAGE, INACTIVE_COMPANY_MESSAGE, PUBLIC_PAGE_SIZE};
use crate::domain::{
    Gtin, NewProduct, ProductFilter, ProductPatch, ProductSummary, PublicProduct,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::Page;
use crate::with_transaction;

const PRODUCT: &str = "Product";

/// Product service trait for dependency injection.
///
/// Every operation taking a GTIN rejects malformed values with a
/// validation error before touching storage.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// One page of visible products, optionally filtered by search text
    async fn search_public(&self, query: Option<String>, page: u64) -> AppResult<Page<PublicProduct>>;

    /// Public lookup; hidden and orphaned products are not found
    async fn get_public(&self, gtin: &str) -> AppResult<PublicProduct>;

    /// Admin listing
    async fn list_products(&self, filter: ProductFilter) -> AppResult<Vec<ProductSummary>>;

    async fn get_product(&self, gtin: &str) -> AppResult<ProductSummary>;

    /// Create a SHOW product for an ACTIVE company
    async fn create_product(&self, new: NewProduct) -> AppResult<ProductSummary>;

    /// Partial update; returns the product as stored afterwards
    async fn update_product(&self, gtin: &str, patch: ProductPatch) -> AppResult<ProductSummary>;

    async fn delete_product(&self, gtin: &str) -> AppResult<()>;
}

/// Concrete implementation of ProductService using Unit of Work.
pub struct ProductManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProductManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProductService for ProductManager<U> {
    async fn search_public(&self, query: Option<String>, page: u64) -> AppResult<Page<PublicProduct>> {
        let page = page.max(1);
        let (rows, total_items) = self
            .uow
            .products()
            .search_visible(query, page, PUBLIC_PAGE_SIZE)
            .await?;

        Ok(Page {
            items: rows
                .into_iter()
                .map(|(product, company)| PublicProduct::new(product, company))
                .collect(),
            page,
            per_page: PUBLIC_PAGE_SIZE,
            total_items,
        })
    }

    async fn get_public(&self, gtin: &str) -> AppResult<PublicProduct> {
        let gtin = Gtin::parse(gtin)?;

        match self.uow.products().find_with_company(gtin.as_str()).await? {
            Some((product, Some(company))) if product.is_visible() => {
                Ok(PublicProduct::new(product, company))
            }
            _ => Err(AppError::not_found(PRODUCT)),
        }
    }

    async fn list_products(&self, filter: ProductFilter) -> AppResult<Vec<ProductSummary>> {
        self.uow.products().list(filter).await
    }

    async fn get_product(&self, gtin: &str) -> AppResult<ProductSummary> {
        let gtin = Gtin::parse(gtin)?;

        let (product, company) = self
            .uow
            .products()
            .find_with_company(gtin.as_str())
            .await?
            .ok_or_not_found(PRODUCT)?;

        Ok(ProductSummary {
            product,
            company_name: company.map(|c| c.name),
        })
    }

    async fn create_product(&self, new: NewProduct) -> AppResult<ProductSummary> {
        let gtin = Gtin::parse(&new.gtin)?;
        let company_id = new
            .company_id
            .ok_or_else(|| AppError::validation("company_id is required"))?;

        let created = with_transaction!(self.uow, |ctx| {
            let company = ctx
                .companies()
                .find_active_for_share(company_id)
                .await?
                .ok_or_else(|| AppError::validation(INACTIVE_COMPANY_MESSAGE))?;

            if ctx.products().exists(gtin.as_str()).await? {
                return Err(AppError::conflict(DUPLICATE_GTIN_MESSAGE));
            }

            let product = ctx.products().insert(new, company.id).await?;
            Ok::<_, AppError>(ProductSummary {
                product,
                company_name: Some(company.name),
            })
        })?;

        tracing::info!(gtin = %created.product.gtin, company_id, "Product created");
        Ok(created)
    }

    async fn update_product(&self, gtin: &str, patch: ProductPatch) -> AppResult<ProductSummary> {
        let gtin = Gtin::parse(gtin)?;

        if patch.is_empty() {
            return Err(AppError::validation("No valid fields to update"));
        }
        patch.check_required().map_err(AppError::validation)?;

        if !self.uow.products().update(gtin.as_str(), patch).await? {
            return Err(AppError::not_found(PRODUCT));
        }
        tracing::info!(gtin = %gtin, "Product updated");

        self.get_product(gtin.as_str()).await
    }

    async fn delete_product(&self, gtin: &str) -> AppResult<()> {
        let gtin = Gtin::parse(gtin)?;

        if !self.uow.products().delete(gtin.as_str()).await? {
            return Err(AppError::not_found(PRODUCT));
        }
        tracing::info!(gtin = %gtin, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::fixtures::company;
    use crate::domain::product::fixtures::{new_product, product};
    use crate::domain::{Company, Product, ProductStatus};
    use crate::infra::{
        MockCompanyRepository, MockProductRepository, MockTxCompanyRepository,
        MockTxProductRepository,
    };
    use crate::services::testing::StubUnitOfWork;
    use mockall::predicate::{always, eq};

    const GTIN: &str = "03000123456789";

    fn manager(products: MockProductRepository) -> ProductManager<StubUnitOfWork> {
        ProductManager::new(Arc::new(StubUnitOfWork::new(
            MockCompanyRepository::new(),
            products,
        )))
    }

    fn creating(
        companies: MockTxCompanyRepository,
        products: MockTxProductRepository,
    ) -> ProductManager<StubUnitOfWork> {
        let uow = StubUnitOfWork::new(MockCompanyRepository::new(), MockProductRepository::new())
            .with_tx_repositories(companies, products);
        ProductManager::new(Arc::new(uow))
    }

    fn active_company(id: i32) -> MockTxCompanyRepository {
        let mut companies = MockTxCompanyRepository::new();
        companies
            .expect_find_active_for_share()
            .with(eq(id))
            .times(1)
            .returning(|id| Ok(Some(company(id))));
        companies
    }

    fn hidden(gtin: &str) -> Product {
        Product {
            status: ProductStatus::Hidden,
            ..product(gtin, 1)
        }
    }

    fn rows(count: usize) -> Vec<(Product, Company)> {
        (0..count)
            .map(|i| (product(&format!("{:013}", i), 1), company(1)))
            .collect()
    }

    #[tokio::test]
    async fn test_search_last_page() {
        let mut products = MockProductRepository::new();
        products
            .expect_search_visible()
            .with(eq(None), eq(3), eq(PUBLIC_PAGE_SIZE))
            .times(1)
            .returning(|_, _, _| Ok((rows(5), 25)));

        let page = manager(products).search_public(None, 3).await.unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages(), 3);
    }

    #[tokio::test]
    async fn test_search_clamps_page() {
        let mut products = MockProductRepository::new();
        products
            .expect_search_visible()
            .with(eq(Some("apple".to_string())), eq(1), always())
            .returning(|_, _, _| Ok((vec![], 0)));

        let page = manager(products)
            .search_public(Some("apple".to_string()), 0)
            .await
            .unwrap();
        assert_eq!(page.page, 1);
    }

    #[tokio::test]
    async fn test_public_lookup_rejects_malformed_gtin() {
        let mut products = MockProductRepository::new();
        products.expect_find_with_company().never();

        let result = manager(products).get_public("12345").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_hidden_product_is_not_found() {
        let mut products = MockProductRepository::new();
        products
            .expect_find_with_company()
            .returning(|gtin| Ok(Some((hidden(gtin), Some(company(1))))));

        let result = manager(products).get_public(GTIN).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_orphaned_product_is_not_found() {
        let mut products = MockProductRepository::new();
        products
            .expect_find_with_company()
            .returning(|gtin| Ok(Some((product(gtin, 1), None))));

        let result = manager(products).get_public(GTIN).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_public_lookup() {
        let mut products = MockProductRepository::new();
        products
            .expect_find_with_company()
            .withf(|gtin: &str| gtin == GTIN)
            .returning(|gtin| Ok(Some((product(gtin, 1), Some(company(1))))));

        let public = manager(products).get_public(GTIN).await.unwrap();
        assert_eq!(public.gtin, GTIN);
        assert_eq!(public.company.company_name, "Maple Foods Inc.");
    }

    #[tokio::test]
    async fn test_admin_get_includes_hidden() {
        let mut products = MockProductRepository::new();
        products
            .expect_find_with_company()
            .returning(|gtin| Ok(Some((hidden(gtin), Some(company(1))))));

        let summary = manager(products).get_product(GTIN).await.unwrap();
        assert_eq!(summary.product.status, ProductStatus::Hidden);
        assert_eq!(summary.company_name.as_deref(), Some("Maple Foods Inc."));
    }

    #[tokio::test]
    async fn test_empty_patch_is_rejected() {
        let mut products = MockProductRepository::new();
        products.expect_update().never();

        let result = manager(products)
            .update_product(GTIN, ProductPatch::default())
            .await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "No valid fields to update"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_patch_cannot_blank_name() {
        let mut products = MockProductRepository::new();
        products.expect_update().never();

        let patch = ProductPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        let result = manager(products).update_product(GTIN, patch).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_patch_missing_product() {
        let mut products = MockProductRepository::new();
        products.expect_update().returning(|_, _| Ok(false));

        let patch = ProductPatch {
            status: Some(ProductStatus::Hidden),
            ..Default::default()
        };
        let result = manager(products).update_product(GTIN, patch).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_patch_returns_stored_product() {
        let mut products = MockProductRepository::new();
        products.expect_update().times(1).returning(|_, _| Ok(true));
        products
            .expect_find_with_company()
            .returning(|gtin| Ok(Some((hidden(gtin), Some(company(1))))));

        let patch = ProductPatch {
            status: Some(ProductStatus::Hidden),
            ..Default::default()
        };
        let summary = manager(products).update_product(GTIN, patch).await.unwrap();
        assert_eq!(summary.product.status, ProductStatus::Hidden);
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let mut products = MockProductRepository::new();
        products
            .expect_delete()
            .withf(|gtin: &str| gtin == GTIN)
            .returning(|_| Ok(false));

        let result = manager(products).delete_product(GTIN).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_gtin_before_transaction() {
        let result = manager(MockProductRepository::new())
            .create_product(new_product("ABC", 1))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_inserts_for_active_company() {
        let mut products = MockTxProductRepository::new();
        products
            .expect_exists()
            .withf(|gtin: &str| gtin == GTIN)
            .times(1)
            .returning(|_| Ok(false));
        products
            .expect_insert()
            .withf(|new, company_id| new.gtin == GTIN && *company_id == 1)
            .times(1)
            .returning(|new, company_id| Ok(product(&new.gtin, company_id)));

        let created = creating(active_company(1), products)
            .create_product(new_product(GTIN, 1))
            .await
            .unwrap();

        assert_eq!(created.product.gtin, GTIN);
        assert_eq!(created.product.status, ProductStatus::Show);
        assert_eq!(created.company_name.as_deref(), Some("Maple Foods Inc."));
    }

    #[tokio::test]
    async fn test_create_for_inactive_company_is_rejected() {
        let mut companies = MockTxCompanyRepository::new();
        companies
            .expect_find_active_for_share()
            .with(eq(7))
            .returning(|_| Ok(None));
        let mut products = MockTxProductRepository::new();
        products.expect_exists().never();
        products.expect_insert().never();

        let result = creating(companies, products)
            .create_product(new_product(GTIN, 7))
            .await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, INACTIVE_COMPANY_MESSAGE),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_gtin_conflicts() {
        let mut products = MockTxProductRepository::new();
        products.expect_exists().returning(|_| Ok(true));
        products.expect_insert().never();

        let result = creating(active_company(1), products)
            .create_product(new_product(GTIN, 1))
            .await;

        match result {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, DUPLICATE_GTIN_MESSAGE),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_reports_racing_insert_as_duplicate() {
        let mut products = MockTxProductRepository::new();
        products.expect_exists().returning(|_| Ok(false));
        products
            .expect_insert()
            .returning(|_, _| Err(AppError::conflict(DUPLICATE_GTIN_MESSAGE)));

        let result = creating(active_company(1), products)
            .create_product(new_product(GTIN, 1))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
