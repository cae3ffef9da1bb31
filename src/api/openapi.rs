//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, company_handler, product_handler, public_handler, upload_handler,
};
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::{
    Company, CompanyAction, CompanyDetails, CompanyStatus, ContactPerson, LocalizedText,
    NewProduct, Product, ProductPatch, ProductStatus, ProductSummary, PublicCompany,
    PublicProduct, Weight,
};
use crate::types::{
    CompanyEnvelope, CompanyList, CreatedId, CreatedIdEnvelope, PaginationMeta, ProductEnvelope,
    ProductList, ProductPage, ProductSummaryList,
};

/// OpenAPI documentation for the GTIN catalog
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GTIN Catalog API",
        version = "0.1.0",
        description = "Company and GTIN product catalog with a public lookup API and an admin API"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Public endpoints
        public_handler::list_products,
        public_handler::get_product,
        public_handler::get_company,
        public_handler::verify_gtins,
        // Authentication endpoints
        auth_handler::login,
        auth_handler::logout,
        auth_handler::session,
        // Company endpoints
        company_handler::list_companies,
        company_handler::list_deactivated,
        company_handler::create_company,
        company_handler::get_company,
        company_handler::update_company,
        company_handler::change_status,
        company_handler::delete_company,
        company_handler::list_company_products,
        // Product endpoints
        product_handler::list_products,
        product_handler::create_product,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
        // Upload endpoints
        upload_handler::upload_image,
        upload_handler::delete_image,
    ),
    components(
        schemas(
            // Domain types
            Company,
            CompanyStatus,
            CompanyDetails,
            CompanyAction,
            ContactPerson,
            PublicCompany,
            Product,
            ProductStatus,
            ProductSummary,
            NewProduct,
            ProductPatch,
            LocalizedText,
            Weight,
            PublicProduct,
            // Envelopes
            ProductPage,
            PaginationMeta,
            CompanyEnvelope,
            CompanyList,
            CreatedId,
            CreatedIdEnvelope,
            ProductEnvelope,
            ProductList,
            ProductSummaryList,
            // Handler types
            public_handler::VerifyRequest,
            public_handler::VerifyResponse,
            public_handler::GtinCheck,
            auth_handler::LoginRequest,
            auth_handler::AuthResponse,
            auth_handler::SessionResponse,
            company_handler::StatusRequest,
            upload_handler::UploadResponse,
            upload_handler::UploadForm,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Public", description = "Public product and company lookup"),
        (name = "Authentication", description = "Admin login and session"),
        (name = "Companies", description = "Company administration"),
        (name = "Products", description = "Product administration"),
        (name = "Uploads", description = "Product image uploads")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the admin session cookie
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE_NAME,
                    "Session cookie set by /api/auth/login",
                ))),
            );
        }
    }
}
