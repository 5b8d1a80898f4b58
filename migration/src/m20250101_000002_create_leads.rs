use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Leads::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Leads::InqId).string().unique_key())
                    .col(ColumnDef::new(Leads::FullName).string().not_null())
                    .col(ColumnDef::new(Leads::DestinationCountry).string())
                    .col(ColumnDef::new(Leads::BranchId).string())
                    .col(ColumnDef::new(Leads::Status).string())
                    .col(ColumnDef::new(Leads::WhatsappNo).string())
                    .col(ColumnDef::new(Leads::InquiryDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Leads::AllocatedUserId).string())
                    .col(ColumnDef::new(Leads::Remarks).text())
                    .col(
                        ColumnDef::new(Leads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Leads::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Leads {
    Table,
    Id,
    InqId,
    FullName,
    DestinationCountry,
    BranchId,
    Status,
    WhatsappNo,
    InquiryDate,
    AllocatedUserId,
    Remarks,
    CreatedAt,
    UpdatedAt,
}
