//! Company domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Company status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CompanyStatus {
    /// Listed publicly and allowed to own new products
    #[serde(rename = "ACTIVE")]
    Active,
    /// Soft-deactivated
    #[serde(rename = "DEACTIVE")]
    Deactive,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "ACTIVE",
            CompanyStatus::Deactive => "DEACTIVE",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CompanyStatus::Active)
    }
}

impl From<&str> for CompanyStatus {
    fn from(s: &str) -> Self {
        match s {
            "DEACTIVE" => CompanyStatus::Deactive,
            _ => CompanyStatus::Active,
        }
    }
}

impl std::fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Company domain entity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Company {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Maple Foods Inc.")]
    pub name: String,
    pub address: String,
    pub telephone: String,
    pub email: String,
    pub owner_name: String,
    pub owner_mobile: String,
    pub owner_email: String,
    pub contact_name: Option<String>,
    pub contact_mobile: Option<String>,
    pub contact_email: Option<String>,
    pub status: CompanyStatus,
}

impl Company {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Company fields supplied on create and on full-replace update.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CompanyDetails {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Maple Foods Inc.")]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "address is required"))]
    #[schema(example = "12 Rue Principale, Montréal")]
    pub address: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "telephone is required"))]
    #[schema(example = "+1 514 555 0100")]
    pub telephone: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "info@maplefoods.example")]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "owner_name is required"))]
    pub owner_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "owner_mobile is required"))]
    pub owner_mobile: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "owner_email is required"))]
    pub owner_email: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_mobile: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// Listing filter for the admin company list (`?status=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanyFilter {
    #[default]
    Active,
    Inactive,
    All,
}

impl CompanyFilter {
    /// Parse the query value; missing or empty means active, an
    /// unrecognised value lists every company.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("active") => CompanyFilter::Active,
            Some("inactive") => CompanyFilter::Inactive,
            Some(_) => CompanyFilter::All,
        }
    }

    /// Status to filter on, `None` meaning no restriction.
    pub fn status(&self) -> Option<CompanyStatus> {
        match self {
            CompanyFilter::Active => Some(CompanyStatus::Active),
            CompanyFilter::Inactive => Some(CompanyStatus::Deactive),
            CompanyFilter::All => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyFilter::Active => "active",
            CompanyFilter::Inactive => "inactive",
            CompanyFilter::All => "all",
        }
    }
}

/// Status action accepted by `PATCH /api/admin/companies/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CompanyAction {
    Deactivate,
    Reactivate,
}

impl CompanyAction {
    pub fn target_status(&self) -> CompanyStatus {
        match self {
            CompanyAction::Deactivate => CompanyStatus::Deactive,
            CompanyAction::Reactivate => CompanyStatus::Active,
        }
    }
}

/// Person block of the public company format
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPerson {
    pub name: String,
    pub mobile_number: String,
    pub email: String,
}

/// Company as exposed by the public lookup API
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicCompany {
    pub company_name: String,
    pub company_address: String,
    pub company_telephone: String,
    pub company_email: String,
    pub owner: ContactPerson,
    pub contact: ContactPerson,
}

impl From<Company> for PublicCompany {
    fn from(company: Company) -> Self {
        Self {
            company_name: company.name,
            company_address: company.address,
            company_telephone: company.telephone,
            company_email: company.email,
            owner: ContactPerson {
                name: company.owner_name,
                mobile_number: company.owner_mobile,
                email: company.owner_email,
            },
            contact: ContactPerson {
                name: company.contact_name.unwrap_or_default(),
                mobile_number: company.contact_mobile.unwrap_or_default(),
                email: company.contact_email.unwrap_or_default(),
            },
        }
    }
}
