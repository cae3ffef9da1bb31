//! Admin company handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::api::extractors::{AppJson, CompanyId, QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Company, CompanyAction, CompanyDetails, CompanyFilter, Product};
use crate::errors::AppResult;
use crate::types::{
    ApiResponse, CompanyEnvelope, CompanyList, Created, CreatedId, CreatedIdEnvelope,
    ListResponse, ProductList,
};

/// Company list query (`?status=active|inactive|all`)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompanyListQuery {
    /// `active` (default), `inactive` or `all`
    pub status: Option<String>,
}

/// Status change request
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusRequest {
    pub action: CompanyAction,
}

/// Create admin company routes
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route("/companies/deactivated", get(list_deactivated))
        .route(
            "/companies/:id",
            get(get_company)
                .put(update_company)
                .patch(change_status)
                .delete(delete_company),
        )
        .route("/companies/:id/products", get(list_company_products))
}

/// List companies by status
#[utoipa::path(
    get,
    path = "/api/admin/companies",
    tag = "Companies",
    params(CompanyListQuery),
    responses(
        (status = 200, description = "Companies ordered by id", body = CompanyList),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_companies(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<CompanyListQuery>,
) -> AppResult<Json<ListResponse<Company>>> {
    let filter = CompanyFilter::parse(query.status.as_deref());
    let companies = state.company_service.list_companies(filter).await?;

    Ok(Json(ListResponse::new(companies).with_status(filter.as_str())))
}

/// List deactivated companies
#[utoipa::path(
    get,
    path = "/api/admin/companies/deactivated",
    tag = "Companies",
    responses(
        (status = 200, description = "Deactivated companies", body = CompanyList),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_deactivated(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Company>>> {
    let companies = state.company_service.list_deactivated().await?;
    Ok(Json(ListResponse::new(companies)))
}

/// Create a company
#[utoipa::path(
    post,
    path = "/api/admin/companies",
    tag = "Companies",
    request_body = CompanyDetails,
    responses(
        (status = 201, description = "Company created", body = CreatedIdEnvelope),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(details): ValidatedJson<CompanyDetails>,
) -> AppResult<Created<CreatedId>> {
    let company = state.company_service.create_company(details).await?;

    Ok(Created(ApiResponse::with_message(
        CreatedId { id: company.id },
        "Company created successfully",
    )))
}

/// Fetch a company regardless of status
#[utoipa::path(
    get,
    path = "/api/admin/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company found", body = CompanyEnvelope),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Company not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_company(
    State(state): State<AppState>,
    CompanyId(id): CompanyId,
) -> AppResult<Json<ApiResponse<Company>>> {
    let company = state.company_service.get_company(id).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Replace a company's details
#[utoipa::path(
    put,
    path = "/api/admin/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company id")),
    request_body = CompanyDetails,
    responses(
        (status = 200, description = "Company updated", body = CompanyEnvelope),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Company not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_company(
    State(state): State<AppState>,
    CompanyId(id): CompanyId,
    ValidatedJson(details): ValidatedJson<CompanyDetails>,
) -> AppResult<Json<ApiResponse<Company>>> {
    let company = state.company_service.update_company(id, details).await?;
    Ok(Json(ApiResponse::with_message(
        company,
        "Company updated successfully",
    )))
}

/// Deactivate or reactivate a company
#[utoipa::path(
    patch,
    path = "/api/admin/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company id")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status changed", body = CompanyEnvelope),
        (status = 400, description = "Unknown action"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Company not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn change_status(
    State(state): State<AppState>,
    CompanyId(id): CompanyId,
    AppJson(request): AppJson<StatusRequest>,
) -> AppResult<Json<ApiResponse<Company>>> {
    let company = state.company_service.apply_action(id, request.action).await?;

    let message = match request.action {
        CompanyAction::Deactivate => "Company deactivated successfully",
        CompanyAction::Reactivate => "Company reactivated successfully",
    };
    Ok(Json(ApiResponse::with_message(company, message)))
}

/// Delete a company that owns no products
#[utoipa::path(
    delete,
    path = "/api/admin/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Company not found"),
        (status = 409, description = "Company still has products")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_company(
    State(state): State<AppState>,
    CompanyId(id): CompanyId,
) -> AppResult<Json<ApiResponse<()>>> {
    state.company_service.delete_company(id).await?;
    Ok(Json(ApiResponse::message("Company deleted successfully")))
}

/// List a company's products ordered by GTIN
#[utoipa::path(
    get,
    path = "/api/admin/companies/{id}/products",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Products of the company", body = ProductList),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Company not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_company_products(
    State(state): State<AppState>,
    CompanyId(id): CompanyId,
) -> AppResult<Json<ListResponse<Product>>> {
    let products = state.company_service.list_company_products(id).await?;
    Ok(Json(ListResponse::new(products)))
}
