//! Shared request/response types.

mod pagination;
mod response;

pub use pagination::{Page, Paginated, PaginationMeta, ProductPage, SearchParams};
pub use response::{
    ApiResponse, CompanyEnvelope, CompanyList, Created, CreatedId, CreatedIdEnvelope,
    ListResponse, ProductEnvelope, ProductList, ProductSummaryList,
};
