use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Customer: list-by-company filter
        manager
            .create_index(
                Index::create()
                    .name("idx_customer_company")
                    .table(Customer::Table)
                    .col(Customer::CompanyId)
                    .to_owned(),
            )
            .await?;

        // Stable pagination order
        manager
            .create_index(
                Index::create()
                    .name("idx_company_created")
                    .table(Company::Table)
                    .col(Company::CreatedAt)
                    .col(Company::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customer_created")
                    .table(Customer::Table)
                    .col(Customer::CreatedAt)
                    .col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_customer_created").table(Customer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_company_created").table(Company::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_customer_company").table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Id, CreatedAt }

#[derive(DeriveIden)]
enum Customer { Table, Id, CompanyId, CreatedAt }
