//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Product, ProductStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub gtin: String,
    pub company_id: i32,
    pub name: String,
    pub name_french: String,
    pub description: Option<String>,
    pub description_french: Option<String>,
    pub brand_name: Option<String>,
    pub country_of_origin: Option<String>,
    pub gross_weight_kg: Option<f64>,
    pub net_weight_kg: Option<f64>,
    pub weight_unit: String,
    /// Reference path of the product image (e.g. `/uploads/<file>`)
    pub image: Option<String>,
    /// `SHOW` or `HIDDEN`
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            gtin: model.gtin,
            company_id: model.company_id,
            name: model.name,
            name_french: model.name_french,
            description: model.description,
            description_french: model.description_french,
            brand_name: model.brand_name,
            country_of_origin: model.country_of_origin,
            gross_weight_kg: model.gross_weight_kg,
            net_weight_kg: model.net_weight_kg,
            weight_unit: model.weight_unit,
            image: model.image,
            status: ProductStatus::from(model.status.as_str()),
        }
    }
}
