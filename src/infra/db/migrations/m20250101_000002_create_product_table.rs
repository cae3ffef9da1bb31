//! Migration: Create product table.
//!
//! Products reference their company; a company that still owns products
//! cannot be deleted.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_company_table::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Product::Gtin)
                            .string_len(14)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Product::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Product::Name).string().not_null())
                    .col(ColumnDef::new(Product::NameFrench).string().not_null())
                    .col(ColumnDef::new(Product::Description).text().null())
                    .col(ColumnDef::new(Product::DescriptionFrench).text().null())
                    .col(ColumnDef::new(Product::BrandName).string().null())
                    .col(ColumnDef::new(Product::CountryOfOrigin).string().null())
                    .col(ColumnDef::new(Product::GrossWeightKg).double().null())
                    .col(ColumnDef::new(Product::NetWeightKg).double().null())
                    .col(
                        ColumnDef::new(Product::WeightUnit)
                            .string_len(16)
                            .not_null()
                            .default("kg"),
                    )
                    .col(ColumnDef::new(Product::Image).string().null())
                    .col(
                        ColumnDef::new(Product::Status)
                            .string_len(16)
                            .not_null()
                            .default("SHOW"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_company")
                            .from(Product::Table, Product::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Public listing filters on status and sorts by English name
        manager
            .create_index(
                Index::create()
                    .name("idx_product_status_name")
                    .table(Product::Table)
                    .col(Product::Status)
                    .col(Product::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_company_id")
                    .table(Product::Table)
                    .col(Product::CompanyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Product {
    Table,
    Gtin,
    CompanyId,
    Name,
    NameFrench,
    Description,
    DescriptionFrench,
    BrandName,
    CountryOfOrigin,
    GrossWeightKg,
    NetWeightKg,
    WeightUnit,
    Image,
    Status,
}
