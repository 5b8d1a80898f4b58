use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_leads::Leads;
use super::m20250101_000003_create_tasks_and_activities::{Activities, Tasks};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Today's work: open tasks per assignee
        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_assigned_to_status")
                    .table(Tasks::Table)
                    .col(Tasks::AssignedTo)
                    .col(Tasks::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_lead_id")
                    .table(Tasks::Table)
                    .col(Tasks::LeadId)
                    .to_owned(),
            )
            .await?;

        // Last follow-up lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_activities_lead_id_kind_occurred_at")
                    .table(Activities::Table)
                    .col(Activities::LeadId)
                    .col(Activities::Kind)
                    .col(Activities::OccurredAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leads_allocated_user_id")
                    .table(Leads::Table)
                    .col(Leads::AllocatedUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_leads_allocated_user_id",
            "idx_activities_lead_id_kind_occurred_at",
            "idx_tasks_lead_id",
            "idx_tasks_assigned_to_status",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
