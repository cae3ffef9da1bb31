use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Company, Product, ProductSummary};

/// Standard admin API response envelope
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    CompanyEnvelope = ApiResponse<Company>,
    ProductEnvelope = ApiResponse<ProductSummary>,
    CreatedIdEnvelope = ApiResponse<CreatedId>
)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// List envelope: `{success, data, count, status?}`
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    CompanyList = ListResponse<Company>,
    ProductList = ListResponse<Product>,
    ProductSummaryList = ListResponse<ProductSummary>
)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
    /// Echo of the status filter that produced the list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Identifier of a newly created row
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedId {
    #[schema(example = 42)]
    pub id: i32,
}

/// Created response helper for POST endpoints
pub struct Created<T: Serialize>(pub ApiResponse<T>);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
