//! Company database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Company, CompanyStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    /// `ACTIVE` or `DEACTIVE`
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Company {
    fn from(model: Model) -> Self {
        Company {
            id: model.id,
            name: model.name,
            address: model.address,
            telephone: model.telephone,
            email: model.email,
            owner_name: model.owner_name,
            owner_mobile: model.owner_mobile,
            owner_email: model.owner_email,
            contact_name: model.contact_name,
            contact_mobile: model.contact_mobile,
            contact_email: model.contact_email,
            status: CompanyStatus::from(model.status.as_str()),
        }
    }
}
