//! Migration: Create company table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Company::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Company::Name).string().not_null())
                    .col(ColumnDef::new(Company::Address).string().not_null())
                    .col(ColumnDef::new(Company::Telephone).string().not_null())
                    .col(ColumnDef::new(Company::Email).string().not_null())
                    .col(ColumnDef::new(Company::OwnerName).string().not_null())
                    .col(ColumnDef::new(Company::OwnerMobile).string().not_null())
                    .col(ColumnDef::new(Company::OwnerEmail).string().not_null())
                    .col(ColumnDef::new(Company::ContactName).string().null())
                    .col(ColumnDef::new(Company::ContactMobile).string().null())
                    .col(ColumnDef::new(Company::ContactEmail).string().null())
                    .col(
                        ColumnDef::new(Company::Status)
                            .string_len(16)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_company_status")
                    .table(Company::Table)
                    .col(Company::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Company {
    Table,
    Id,
    Name,
    Address,
    Telephone,
    Email,
    OwnerName,
    OwnerMobile,
    OwnerEmail,
    ContactName,
    ContactMobile,
    ContactEmail,
    Status,
}
