use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_leads::Leads;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeadNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeadNotes::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeadNotes::LeadId).string().not_null())
                    .col(ColumnDef::new(LeadNotes::Body).text().not_null())
                    .col(ColumnDef::new(LeadNotes::CreatedBy).string().not_null())
                    .col(
                        ColumnDef::new(LeadNotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lead_notes_lead_id")
                            .from(LeadNotes::Table, LeadNotes::LeadId)
                            .to(Leads::Table, Leads::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeadNotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeadNotes {
    Table,
    Id,
    LeadId,
    Body,
    CreatedBy,
    CreatedAt,
}
