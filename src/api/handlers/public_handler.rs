//! Public lookup handlers: product search, GTIN and company lookups.
//!
//! No session is needed. Hidden products and deactivated companies are
//! reported exactly like missing ones.

use axum::{
    extract::{OriginalUri, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{CompanyId, QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{PublicCompany, PublicProduct};
use crate::errors::{AppError, AppResult};
use crate::types::{Paginated, ProductPage, SearchParams};

/// Bulk GTIN verification request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VerifyRequest {
    /// GTINs to check, one result per entry
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "between 1 and 100 GTINs are required"))]
    #[schema(example = json!(["03000123456789", "4006381333931"]))]
    pub gtins: Vec<String>,
}

/// Outcome of verifying one GTIN
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GtinCheck {
    pub gtin: String,
    /// True when the GTIN names a publicly visible product
    pub is_valid: bool,
    /// English product name when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

/// Bulk GTIN verification result
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    pub results: Vec<GtinCheck>,
}

/// Create public lookup routes
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/products.json", get(list_products))
        .route("/products.json/:gtin", get(get_product))
        .route("/companies.json/:id", get(get_company))
        .route("/verification.json", post(verify_gtins))
}

/// Search visible products, ten per page
#[utoipa::path(
    get,
    path = "/products.json",
    tag = "Public",
    params(SearchParams),
    responses(
        (status = 200, description = "One page of products", body = ProductPage)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    QueryParams(params): QueryParams<SearchParams>,
) -> AppResult<Json<Paginated<PublicProduct>>> {
    let query = params.search_text();
    let page = state
        .product_service
        .search_public(query.clone(), params.page_number())
        .await?;

    let base_url = format!(
        "{}{}",
        state.settings.public_base_url.as_deref().unwrap_or(""),
        uri.path()
    );

    Ok(Json(Paginated::from_page(page, &base_url, query.as_deref())))
}

/// Look up a visible product by GTIN
#[utoipa::path(
    get,
    path = "/products.json/{gtin}",
    tag = "Public",
    params(("gtin" = String, Path, description = "13 or 14 digit GTIN")),
    responses(
        (status = 200, description = "Product found", body = PublicProduct),
        (status = 400, description = "Malformed GTIN"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(gtin): Path<String>,
) -> AppResult<Json<PublicProduct>> {
    let product = state.product_service.get_public(&gtin).await?;
    Ok(Json(product))
}

/// Look up an active company by id
#[utoipa::path(
    get,
    path = "/companies.json/{id}",
    tag = "Public",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company found", body = PublicCompany),
        (status = 404, description = "Company not found or deactivated")
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    CompanyId(id): CompanyId,
) -> AppResult<Json<PublicCompany>> {
    let company = state.company_service.get_public_company(id).await?;
    Ok(Json(company))
}

/// Check a batch of GTINs against the public catalog
#[utoipa::path(
    post,
    path = "/verification.json",
    tag = "Public",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "One result per submitted GTIN", body = VerifyResponse),
        (status = 400, description = "Empty or oversized batch")
    )
)]
pub async fn verify_gtins(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<VerifyRequest>,
) -> AppResult<Json<VerifyResponse>> {
    let mut results = Vec::with_capacity(payload.gtins.len());

    for raw in payload.gtins {
        let gtin = raw.trim().to_string();
        let check = match state.product_service.get_public(&gtin).await {
            Ok(product) => GtinCheck {
                gtin,
                is_valid: true,
                product_name: Some(product.name.en),
            },
            Err(AppError::NotFound(_) | AppError::Validation(_)) => GtinCheck {
                gtin,
                is_valid: false,
                product_name: None,
            },
            Err(e) => return Err(e),
        };
        results.push(check);
    }

    Ok(Json(VerifyResponse { results }))
}
