//! Company id path segment.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// Numeric company id from the `:id` path segment.
///
/// A segment that is not an integer cannot name a company, so it is
/// reported as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for CompanyId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("Company"))?;

        raw.trim()
            .parse::<i32>()
            .map(CompanyId)
            .map_err(|_| AppError::not_found("Company"))
    }
}
