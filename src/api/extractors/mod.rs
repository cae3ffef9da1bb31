//! Custom extractors that reject with the JSON error body.

mod company_id;
mod json;
mod query;
mod validated_json;

pub use company_id::CompanyId;
pub use json::AppJson;
pub use query::QueryParams;
pub use validated_json::ValidatedJson;
