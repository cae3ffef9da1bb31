//! Company service - Company lookup, administration and status changes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    Company, CompanyAction, CompanyDetails, CompanyFilter, CompanyStatus, Product, PublicCompany,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

const COMPANY: &str = "Company";

/// Company service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// Public view of an ACTIVE company; deactivated companies are not found
    async fn get_public_company(&self, id: i32) -> AppResult<PublicCompany>;

    /// Companies matching the filter, ordered by id
    async fn list_companies(&self, filter: CompanyFilter) -> AppResult<Vec<Company>>;

    /// All DEACTIVE companies
    async fn list_deactivated(&self) -> AppResult<Vec<Company>>;

    async fn get_company(&self, id: i32) -> AppResult<Company>;

    async fn create_company(&self, details: CompanyDetails) -> AppResult<Company>;

    /// Full replace of the contact fields
    async fn update_company(&self, id: i32, details: CompanyDetails) -> AppResult<Company>;

    /// Deactivate or reactivate
    async fn apply_action(&self, id: i32, action: CompanyAction) -> AppResult<Company>;

    /// Hard delete; refused while products reference the company
    async fn delete_company(&self, id: i32) -> AppResult<()>;

    /// Every product of the company ordered by GTIN
    async fn list_company_products(&self, id: i32) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of CompanyService using Unit of Work.
pub struct CompanyManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CompanyManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CompanyService for CompanyManager<U> {
    async fn get_public_company(&self, id: i32) -> AppResult<PublicCompany> {
        self.uow
            .companies()
            .find_by_id(id)
            .await?
            .filter(Company::is_active)
            .map(PublicCompany::from)
            .ok_or_not_found(COMPANY)
    }

    async fn list_companies(&self, filter: CompanyFilter) -> AppResult<Vec<Company>> {
        self.uow.companies().list(filter.status()).await
    }

    async fn list_deactivated(&self) -> AppResult<Vec<Company>> {
        self.uow.companies().list(Some(CompanyStatus::Deactive)).await
    }

    async fn get_company(&self, id: i32) -> AppResult<Company> {
        self.uow
            .companies()
            .find_by_id(id)
            .await?
            .ok_or_not_found(COMPANY)
    }

    async fn create_company(&self, details: CompanyDetails) -> AppResult<Company> {
        let company = self.uow.companies().create(details).await?;
        tracing::info!(company_id = company.id, name = %company.name, "Company created");
        Ok(company)
    }

    async fn update_company(&self, id: i32, details: CompanyDetails) -> AppResult<Company> {
        let company = self
            .uow
            .companies()
            .update(id, details)
            .await?
            .ok_or_not_found(COMPANY)?;
        tracing::info!(company_id = id, "Company updated");
        Ok(company)
    }

    async fn apply_action(&self, id: i32, action: CompanyAction) -> AppResult<Company> {
        let status = action.target_status();
        let company = self
            .uow
            .companies()
            .set_status(id, status)
            .await?
            .ok_or_not_found(COMPANY)?;
        tracing::info!(company_id = id, status = %status, "Company status changed");
        Ok(company)
    }

    async fn delete_company(&self, id: i32) -> AppResult<()> {
        if !self.uow.companies().delete(id).await? {
            return Err(AppError::not_found(COMPANY));
        }
        tracing::info!(company_id = id, "Company deleted");
        Ok(())
    }

    async fn list_company_products(&self, id: i32) -> AppResult<Vec<Product>> {
        self.get_company(id).await?;
        self.uow.products().list_by_company(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::fixtures::{company, details};
    use crate::domain::product::fixtures::product;
    use crate::infra::{MockCompanyRepository, MockProductRepository};
    use crate::services::testing::StubUnitOfWork;
    use mockall::predicate::eq;

    fn manager(
        companies: MockCompanyRepository,
        products: MockProductRepository,
    ) -> CompanyManager<StubUnitOfWork> {
        CompanyManager::new(Arc::new(StubUnitOfWork::new(companies, products)))
    }

    fn deactivated(id: i32) -> Company {
        Company {
            status: CompanyStatus::Deactive,
            ..company(id)
        }
    }

    #[tokio::test]
    async fn test_public_company_hides_deactivated() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(deactivated(id))));

        let result = manager(companies, MockProductRepository::new())
            .get_public_company(7)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_public_company_format() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_id()
            .returning(|id| Ok(Some(company(id))));

        let public = manager(companies, MockProductRepository::new())
            .get_public_company(1)
            .await
            .unwrap();

        assert_eq!(public.company_name, "Maple Foods Inc.");
        assert_eq!(public.owner.name, "Anne Roy");
    }

    #[tokio::test]
    async fn test_list_uses_filter_status() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_list()
            .with(eq(None))
            .times(1)
            .returning(|_| Ok(vec![company(1), deactivated(2)]));

        let listed = manager(companies, MockProductRepository::new())
            .list_companies(CompanyFilter::All)
            .await
            .unwrap();

        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_reactivate_sets_active() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_set_status()
            .with(eq(2), eq(CompanyStatus::Active))
            .times(1)
            .returning(|id, _| Ok(Some(company(id))));

        let updated = manager(companies, MockProductRepository::new())
            .apply_action(2, CompanyAction::Reactivate)
            .await
            .unwrap();

        assert!(updated.is_active());
    }

    #[tokio::test]
    async fn test_update_missing_company() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_update().returning(|_, _| Ok(None));

        let result = manager(companies, MockProductRepository::new())
            .update_company(99, details())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_company() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_delete().with(eq(5)).returning(|_| Ok(false));

        let result = manager(companies, MockProductRepository::new())
            .delete_company(5)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_company_products_require_company() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_find_by_id().returning(|_| Ok(None));
        let mut products = MockProductRepository::new();
        products.expect_list_by_company().never();

        let result = manager(companies, products).list_company_products(3).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_company_products_listed() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_id()
            .returning(|id| Ok(Some(company(id))));
        let mut products = MockProductRepository::new();
        products
            .expect_list_by_company()
            .with(eq(3))
            .returning(|id| Ok(vec![product("0000000000017", id), product("0000000000024", id)]));

        let listed = manager(companies, products)
            .list_company_products(3)
            .await
            .unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].company_id, 3);
    }
}
