//! Admin product handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::{AppJson, QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewProduct, ProductFilter, ProductPatch, ProductStatus, ProductSummary};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, ListResponse, ProductEnvelope, ProductSummaryList};

/// Admin product list query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// `SHOW` (default) or `HIDDEN`
    pub status: Option<String>,
    /// Restrict to one company
    pub company_id: Option<i32>,
    /// Substring of a name, description or brand
    pub search: Option<String>,
}

impl ProductListQuery {
    fn into_filter(self) -> ProductFilter {
        ProductFilter {
            status: self
                .status
                .as_deref()
                .map(|s| ProductStatus::from(s.trim().to_ascii_uppercase().as_str()))
                .unwrap_or_default(),
            company_id: self.company_id,
            search: self
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Create admin product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:gtin",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

/// List products with their company name
#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = "Products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Products ordered by name", body = ProductSummaryList),
        (status = 400, description = "Malformed query"),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_products(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ProductListQuery>,
) -> AppResult<Json<ListResponse<ProductSummary>>> {
    let filter = query.into_filter();
    let status = filter.status;
    let products = state.product_service.list_products(filter).await?;

    Ok(Json(ListResponse::new(products).with_status(status.as_str())))
}

/// Create a product for an active company
#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = ProductEnvelope),
        (status = 400, description = "Missing field, malformed GTIN or inactive company"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "GTIN already exists")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewProduct>,
) -> AppResult<Created<ProductSummary>> {
    let product = state.product_service.create_product(payload).await?;
    Ok(Created(ApiResponse::with_message(
        product,
        "Product created successfully",
    )))
}

/// Fetch a product regardless of status
#[utoipa::path(
    get,
    path = "/api/admin/products/{gtin}",
    tag = "Products",
    params(("gtin" = String, Path, description = "13 or 14 digit GTIN")),
    responses(
        (status = 200, description = "Product found", body = ProductEnvelope),
        (status = 400, description = "Malformed GTIN"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Product not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(gtin): Path<String>,
) -> AppResult<Json<ApiResponse<ProductSummary>>> {
    let product = state.product_service.get_product(&gtin).await?;
    Ok(Json(ApiResponse::success(product)))
}

/// Partially update a product
#[utoipa::path(
    patch,
    path = "/api/admin/products/{gtin}",
    tag = "Products",
    params(("gtin" = String, Path, description = "13 or 14 digit GTIN")),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = ProductEnvelope),
        (status = 400, description = "Empty patch, blank name or malformed GTIN"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Product not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(gtin): Path<String>,
    AppJson(patch): AppJson<ProductPatch>,
) -> AppResult<Json<ApiResponse<ProductSummary>>> {
    let product = state.product_service.update_product(&gtin, patch).await?;
    Ok(Json(ApiResponse::with_message(
        product,
        "Product updated successfully",
    )))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/admin/products/{gtin}",
    tag = "Products",
    params(("gtin" = String, Path, description = "13 or 14 digit GTIN")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Malformed GTIN"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Product not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(gtin): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.product_service.delete_product(&gtin).await?;
    Ok(Json(ApiResponse::message("Product deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_to_visible() {
        let filter = ProductListQuery::default().into_filter();
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_list_query_normalizes_values() {
        let filter = ProductListQuery {
            status: Some("hidden".to_string()),
            company_id: Some(4),
            search: Some("   ".to_string()),
        }
        .into_filter();

        assert_eq!(filter.status, ProductStatus::Hidden);
        assert_eq!(filter.company_id, Some(4));
        assert_eq!(filter.search, None);
    }
}
