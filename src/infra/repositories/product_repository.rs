//! Product repository - Data access for products.
//!
//! Text search is a case-insensitive substring match: both the column and
//! the pattern are lower-cased and LIKE wildcards in user input are escaped.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::ActiveValue::{self, NotSet, Set};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SelectTwo,
};

use super::entities::company::{self, Entity as CompanyEntity};
use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{Company, Product, ProductFilter, ProductPatch, ProductStatus, ProductSummary};
use crate::errors::AppResult;

/// Columns searched by the public listing
const PUBLIC_SEARCH_COLUMNS: &[product::Column] = &[
    product::Column::Name,
    product::Column::NameFrench,
    product::Column::Description,
    product::Column::DescriptionFrench,
];

/// Columns searched by the admin listing
const ADMIN_SEARCH_COLUMNS: &[product::Column] = &[
    product::Column::Name,
    product::Column::NameFrench,
    product::Column::Description,
    product::Column::DescriptionFrench,
    product::Column::BrandName,
];

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by GTIN regardless of status
    async fn find_by_gtin(&self, gtin: &str) -> AppResult<Option<Product>>;

    /// Find product together with its company, if the company row exists
    async fn find_with_company(&self, gtin: &str) -> AppResult<Option<(Product, Option<Company>)>>;

    /// One page of SHOW products that have a company, ordered by name.
    ///
    /// `page` is 1-based. Returns the page and the total number of matches.
    async fn search_visible(
        &self,
        query: Option<String>,
        page: u64,
        per_page: u64,
    ) -> AppResult<(Vec<(Product, Company)>, u64)>;

    /// Admin listing, ordered by name, each with its company name
    async fn list(&self, filter: ProductFilter) -> AppResult<Vec<ProductSummary>>;

    /// Products of one company ordered by GTIN
    async fn list_by_company(&self, company_id: i32) -> AppResult<Vec<Product>>;

    /// Apply a partial update; `false` when no product has this GTIN
    async fn update(&self, gtin: &str, patch: ProductPatch) -> AppResult<bool>;

    /// Hard delete; `false` when nothing was deleted
    async fn delete(&self, gtin: &str) -> AppResult<bool>;
}

/// SeaORM-backed product repository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Lower-cased `%...%` pattern with `%`, `_` and `\` escaped.
pub(crate) fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Match `query` as a substring of any of `columns`
fn text_match(query: &str, columns: &[product::Column]) -> Condition {
    let pattern = like_pattern(query);
    columns.iter().fold(Condition::any(), |cond, column| {
        cond.add(
            Expr::expr(Func::lower(Expr::col((ProductEntity, *column))))
                .like(LikeExpr::new(pattern.as_str()).escape('\\')),
        )
    })
}

/// SHOW products joined to their company, ordered by name then GTIN
fn visible_products(query: Option<&str>) -> SelectTwo<ProductEntity, CompanyEntity> {
    let mut select = ProductEntity::find()
        .inner_join(CompanyEntity)
        .filter(product::Column::Status.eq(ProductStatus::Show.as_str()));

    if let Some(q) = query {
        select = select.filter(text_match(q, PUBLIC_SEARCH_COLUMNS));
    }

    select
        .select_also(CompanyEntity)
        .order_by_asc(product::Column::Name)
        .order_by_asc(product::Column::Gtin)
}

/// Zero-based index of a 1-based `page` that holds rows, `None` past the end.
fn page_index(page: u64, per_page: u64, total: u64) -> Option<u64> {
    let index = page.max(1) - 1;
    let offset = index.checked_mul(per_page)?;
    (offset < total).then_some(index)
}

/// Optional text column from a patch; blank strings are stored as NULL
fn optional_text(value: Option<Option<String>>) -> ActiveValue<Option<String>> {
    match value {
        Some(v) => Set(v.filter(|s| !s.trim().is_empty())),
        None => NotSet,
    }
}

fn patch_model(patch: ProductPatch) -> ActiveModel {
    ActiveModel {
        name: patch.name.map_or(NotSet, Set),
        name_french: patch.name_french.map_or(NotSet, Set),
        description: optional_text(patch.description),
        description_french: optional_text(patch.description_french),
        brand_name: optional_text(patch.brand_name),
        country_of_origin: optional_text(patch.country_of_origin),
        gross_weight_kg: patch.gross_weight_kg.map_or(NotSet, Set),
        net_weight_kg: patch.net_weight_kg.map_or(NotSet, Set),
        weight_unit: patch.weight_unit.map_or(NotSet, Set),
        image: optional_text(patch.image),
        status: patch
            .status
            .map_or(NotSet, |status| Set(status.as_str().to_string())),
        ..Default::default()
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_by_gtin(&self, gtin: &str) -> AppResult<Option<Product>> {
        let model = ProductEntity::find_by_id(gtin.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(Product::from))
    }

    async fn find_with_company(&self, gtin: &str) -> AppResult<Option<(Product, Option<Company>)>> {
        let row = ProductEntity::find_by_id(gtin.to_string())
            .find_also_related(CompanyEntity)
            .one(&self.db)
            .await?;

        Ok(row.map(|(p, c)| (Product::from(p), c.map(Company::from))))
    }

    async fn search_visible(
        &self,
        query: Option<String>,
        page: u64,
        per_page: u64,
    ) -> AppResult<(Vec<(Product, Company)>, u64)> {
        let paginator = visible_products(query.as_deref()).paginate(&self.db, per_page);

        let total = paginator.num_items().await?;
        let Some(index) = page_index(page, per_page, total) else {
            return Ok((Vec::new(), total));
        };
        let rows = paginator.fetch_page(index).await?;

        let items = rows
            .into_iter()
            .filter_map(|(p, c)| c.map(|c| (Product::from(p), Company::from(c))))
            .collect();

        Ok((items, total))
    }

    async fn list(&self, filter: ProductFilter) -> AppResult<Vec<ProductSummary>> {
        let mut select = ProductEntity::find()
            .filter(product::Column::Status.eq(filter.status.as_str()));

        if let Some(company_id) = filter.company_id {
            select = select.filter(product::Column::CompanyId.eq(company_id));
        }
        if let Some(search) = filter.search.as_deref() {
            select = select.filter(text_match(search, ADMIN_SEARCH_COLUMNS));
        }

        let rows = select
            .find_also_related(CompanyEntity)
            .order_by_asc(product::Column::Name)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(p, c)| ProductSummary {
                product: Product::from(p),
                company_name: c.map(|c: company::Model| c.name),
            })
            .collect())
    }

    async fn list_by_company(&self, company_id: i32) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .filter(product::Column::CompanyId.eq(company_id))
            .order_by_asc(product::Column::Gtin)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, gtin: &str, patch: ProductPatch) -> AppResult<bool> {
        let result = ProductEntity::update_many()
            .set(patch_model(patch))
            .filter(product::Column::Gtin.eq(gtin))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, gtin: &str) -> AppResult<bool> {
        let result = ProductEntity::delete_by_id(gtin.to_string())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, QueryTrait};

    #[test]
    fn test_page_index_within_results() {
        assert_eq!(page_index(1, 10, 25), Some(0));
        assert_eq!(page_index(3, 10, 25), Some(2));
        assert_eq!(page_index(0, 10, 25), Some(0));
    }

    #[test]
    fn test_page_index_past_the_end() {
        assert_eq!(page_index(4, 10, 25), None);
        assert_eq!(page_index(1, 10, 0), None);
        assert_eq!(page_index(1_000_000_000_000_000_000, 10, 25), None);
        assert_eq!(page_index(u64::MAX, 10, 25), None);
    }

    #[test]
    fn test_visible_products_sql() {
        let sql = visible_products(None)
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"INNER JOIN "company" ON "product"."company_id" = "company"."id""#));
        assert!(sql.contains(r#""product"."status" = 'SHOW'"#));
        assert!(sql.contains(r#"ORDER BY "product"."name" ASC, "product"."gtin" ASC"#));
        assert!(!sql.contains("LIKE"));
    }

    #[test]
    fn test_visible_products_search_sql() {
        let sql = visible_products(Some("Apple"))
            .build(DatabaseBackend::Postgres)
            .to_string();

        for column in ["name", "name_french", "description", "description_french"] {
            let lowered = format!(r#"LOWER("product"."{}") LIKE '%apple%'"#, column);
            assert!(sql.contains(&lowered), "missing {} in {}", lowered, sql);
        }
        assert!(!sql.contains(r#""brand_name") LIKE"#));
        assert_eq!(sql.matches("ESCAPE").count(), 4);
        assert_eq!(sql.matches(" OR ").count(), 3);
        assert!(sql.contains(r#""product"."status" = 'SHOW'"#));
    }

    #[test]
    fn test_like_pattern_lowercases_and_wraps() {
        assert_eq!(like_pattern("Apple"), "%apple%");
        assert_eq!(like_pattern("CRÈME"), "%crème%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern(r"c:\d"), r"%c:\\d%");
    }

    #[test]
    fn test_patch_model_only_sets_supplied_columns() {
        let patch = ProductPatch {
            name: Some("Green Apple".to_string()),
            description: Some(None),
            brand_name: Some(Some("  ".to_string())),
            status: Some(ProductStatus::Hidden),
            ..Default::default()
        };
        let model = patch_model(patch);

        assert_eq!(model.name, ActiveValue::Set("Green Apple".to_string()));
        assert_eq!(model.description, ActiveValue::Set(None));
        assert_eq!(model.brand_name, ActiveValue::Set(None));
        assert_eq!(model.status, ActiveValue::Set("HIDDEN".to_string()));
        assert!(matches!(model.gtin, ActiveValue::NotSet));
        assert!(matches!(model.name_french, ActiveValue::NotSet));
        assert!(matches!(model.weight_unit, ActiveValue::NotSet));
    }
}
