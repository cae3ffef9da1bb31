//! Product domain entity and related types.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::company::{Company, PublicCompany};
use crate::config::DEFAULT_WEIGHT_UNIT;

/// Product visibility flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum ProductStatus {
    /// Included in the public listing and lookup
    #[default]
    #[serde(rename = "SHOW")]
    Show,
    /// Only visible to admins
    #[serde(rename = "HIDDEN")]
    Hidden,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Show => "SHOW",
            ProductStatus::Hidden => "HIDDEN",
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ProductStatus::Show)
    }
}

impl From<&str> for ProductStatus {
    fn from(s: &str) -> Self {
        match s {
            "HIDDEN" => ProductStatus::Hidden,
            _ => ProductStatus::Show,
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product domain entity, keyed by GTIN
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    #[schema(example = "03000123456789")]
    pub gtin: String,
    pub company_id: i32,
    #[schema(example = "Maple Syrup")]
    pub name: String,
    #[schema(example = "Sirop d'érable")]
    pub name_french: String,
    pub description: Option<String>,
    pub description_french: Option<String>,
    pub brand_name: Option<String>,
    pub country_of_origin: Option<String>,
    pub gross_weight_kg: Option<f64>,
    pub net_weight_kg: Option<f64>,
    #[schema(example = "kg")]
    pub weight_unit: String,
    #[schema(example = "/uploads/0b8e6c1e-3f7a-4a55-9a51-7d1f0c6c2a10.png")]
    pub image: Option<String>,
    pub status: ProductStatus,
}

impl Product {
    pub fn is_visible(&self) -> bool {
        self.status.is_visible()
    }
}

/// Product with the owning company's name (admin views)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductSummary {
    #[serde(flatten)]
    pub product: Product,
    pub company_name: Option<String>,
}

/// Product creation payload
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    #[serde(default)]
    #[validate(length(min = 1, message = "gtin is required"))]
    #[schema(example = "03000123456789")]
    pub gtin: String,
    #[validate(required(message = "company_id is required"))]
    #[schema(example = 1)]
    pub company_id: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Maple Syrup")]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "name_french is required"))]
    #[schema(example = "Sirop d'érable")]
    pub name_french: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_french: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub country_of_origin: Option<String>,
    #[serde(default)]
    pub gross_weight_kg: Option<f64>,
    #[serde(default)]
    pub net_weight_kg: Option<f64>,
    #[serde(default)]
    #[schema(example = "kg")]
    pub weight_unit: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewProduct {
    /// Weight unit to store, falling back to the default unit.
    pub fn weight_unit_or_default(&self) -> String {
        self.weight_unit
            .as_deref()
            .filter(|unit| !unit.is_empty())
            .unwrap_or(DEFAULT_WEIGHT_UNIT)
            .to_string()
    }
}

/// Partial product update.
///
/// Outer `None` leaves a column untouched; for optional columns
/// `Some(None)` (an explicit JSON `null`) clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_french: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description_french: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub brand_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub country_of_origin: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub gross_weight_kg: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub net_weight_kg: Option<Option<f64>>,
    #[serde(default)]
    pub weight_unit: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

/// Marks a field as present, keeping an explicit `null` as `Some(None)`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl ProductPatch {
    /// True when no column would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.name_french.is_none()
            && self.description.is_none()
            && self.description_french.is_none()
            && self.brand_name.is_none()
            && self.country_of_origin.is_none()
            && self.gross_weight_kg.is_none()
            && self.net_weight_kg.is_none()
            && self.weight_unit.is_none()
            && self.image.is_none()
            && self.status.is_none()
    }

    /// Rejects attempts to blank out the required bilingual names.
    pub fn check_required(&self) -> Result<(), &'static str> {
        if matches!(self.name.as_deref(), Some("")) {
            return Err("name cannot be empty");
        }
        if matches!(self.name_french.as_deref(), Some("")) {
            return Err("name_french cannot be empty");
        }
        Ok(())
    }
}

/// Admin product listing filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub status: ProductStatus,
    pub company_id: Option<i32>,
    pub search: Option<String>,
}

/// English/French text pair
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LocalizedText {
    pub en: String,
    pub fr: String,
}

/// Weight block of the public product format
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Weight {
    pub gross: f64,
    pub net: f64,
    pub unit: String,
}

/// Product as exposed by the public lookup API
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicProduct {
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub gtin: String,
    pub image: String,
    pub brand: String,
    pub country_of_origin: String,
    pub weight: Weight,
    pub company: PublicCompany,
}

impl PublicProduct {
    pub fn new(product: Product, company: Company) -> Self {
        let unit = if product.weight_unit.is_empty() {
            DEFAULT_WEIGHT_UNIT.to_string()
        } else {
            product.weight_unit
        };

        Self {
            name: LocalizedText {
                en: product.name,
                fr: product.name_french,
            },
            description: LocalizedText {
                en: product.description.unwrap_or_default(),
                fr: product.description_french.unwrap_or_default(),
            },
            gtin: product.gtin,
            image: product.image.unwrap_or_default(),
            brand: product.brand_name.unwrap_or_default(),
            country_of_origin: product.country_of_origin.unwrap_or_default(),
            weight: Weight {
                gross: product.gross_weight_kg.unwrap_or(0.0),
                net: product.net_weight_kg.unwrap_or(0.0),
                unit,
            },
            company: PublicCompany::from(company),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product(gtin: &str, company_id: i32) -> Product {
        Product {
            gtin: gtin.to_string(),
            company_id,
            name: "Maple Syrup".to_string(),
            name_french: "Sirop d'érable".to_string(),
            description: Some("Pure amber syrup".to_string()),
            description_french: None,
            brand_name: Some("Érablière".to_string()),
            country_of_origin: Some("Canada".to_string()),
            gross_weight_kg: Some(0.6),
            net_weight_kg: None,
            weight_unit: "kg".to_string(),
            image: None,
            status: ProductStatus::Show,
        }
    }

    pub fn new_product(gtin: &str, company_id: i32) -> NewProduct {
        NewProduct {
            gtin: gtin.to_string(),
            company_id: Some(company_id),
            name: "Maple Syrup".to_string(),
            name_french: "Sirop d'érable".to_string(),
            description: None,
            description_french: None,
            brand_name: None,
            country_of_origin: None,
            gross_weight_kg: None,
            net_weight_kg: None,
            weight_unit: None,
            image: None,
        }
    }
}
