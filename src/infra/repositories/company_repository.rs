//! Company repository - Data access for companies.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::company::{self, ActiveModel, Entity as CompanyEntity};
use crate::config::COMPANY_HAS_PRODUCTS_MESSAGE;
use crate::domain::{Company, CompanyDetails, CompanyStatus};
use crate::errors::{AppError, AppResult};

/// Company repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Find company by id regardless of status
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Company>>;

    /// List companies ordered by id, optionally restricted to one status
    async fn list(&self, status: Option<CompanyStatus>) -> AppResult<Vec<Company>>;

    /// Insert a new ACTIVE company
    async fn create(&self, details: CompanyDetails) -> AppResult<Company>;

    /// Replace every contact field; `None` when the company does not exist
    async fn update(&self, id: i32, details: CompanyDetails) -> AppResult<Option<Company>>;

    /// Set the status flag; `None` when the company does not exist
    async fn set_status(&self, id: i32, status: CompanyStatus) -> AppResult<Option<Company>>;

    /// Hard delete; `false` when nothing was deleted
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed company repository
pub struct CompanyStore {
    db: DatabaseConnection,
}

impl CompanyStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Active model carrying every editable company column
fn details_model(details: CompanyDetails) -> ActiveModel {
    ActiveModel {
        name: Set(details.name),
        address: Set(details.address),
        telephone: Set(details.telephone),
        email: Set(details.email),
        owner_name: Set(details.owner_name),
        owner_mobile: Set(details.owner_mobile),
        owner_email: Set(details.owner_email),
        contact_name: Set(details.contact_name),
        contact_mobile: Set(details.contact_mobile),
        contact_email: Set(details.contact_email),
        ..Default::default()
    }
}

/// Run an update, mapping "no row matched" to `None`
async fn update_existing(
    db: &DatabaseConnection,
    model: ActiveModel,
) -> AppResult<Option<Company>> {
    match model.update(db).await {
        Ok(updated) => Ok(Some(Company::from(updated))),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl CompanyRepository for CompanyStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Company>> {
        let model = CompanyEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Company::from))
    }

    async fn list(&self, status: Option<CompanyStatus>) -> AppResult<Vec<Company>> {
        let mut query = CompanyEntity::find();
        if let Some(status) = status {
            query = query.filter(company::Column::Status.eq(status.as_str()));
        }

        let models = query
            .order_by_asc(company::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Company::from).collect())
    }

    async fn create(&self, details: CompanyDetails) -> AppResult<Company> {
        let mut model = details_model(details);
        model.status = Set(CompanyStatus::Active.as_str().to_string());

        let created = model.insert(&self.db).await?;
        Ok(Company::from(created))
    }

    async fn update(&self, id: i32, details: CompanyDetails) -> AppResult<Option<Company>> {
        let mut model = details_model(details);
        model.id = Set(id);
        update_existing(&self.db, model).await
    }

    async fn set_status(&self, id: i32, status: CompanyStatus) -> AppResult<Option<Company>> {
        let model = ActiveModel {
            id: Set(id),
            status: Set(status.as_str().to_string()),
            ..Default::default()
        };
        update_existing(&self.db, model).await
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = CompanyEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_constraint(e, COMPANY_HAS_PRODUCTS_MESSAGE))?;

        Ok(result.rows_affected > 0)
    }
}
