//! Domain layer - Core business entities and logic
//!
//! This module contains the catalog's domain models: companies, their
//! GTIN-identified products, and the admin passphrase value object.
//! Nothing here touches the database or HTTP.

pub mod company;
pub mod gtin;
pub mod passphrase;
pub mod product;

pub use company::{
    Company, CompanyAction, CompanyDetails, CompanyFilter, CompanyStatus, ContactPerson,
    PublicCompany,
};
pub use gtin::{validate_gtin, Gtin};
pub use passphrase::Passphrase;
pub use product::{
    LocalizedText, NewProduct, Product, ProductFilter, ProductPatch, ProductStatus,
    ProductSummary, PublicProduct, Weight,
};
