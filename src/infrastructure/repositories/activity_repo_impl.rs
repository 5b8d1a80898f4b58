// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::{Activity, LEAD_STATUS_IN_PROGRESS, LEAD_STATUS_NEW};
use crate::domain::repositories::activity_repository::ActivityRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::{activity as activity_entity, lead as lead_entity};
use crate::infrastructure::repositories::classify_write_error;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;

/// 活动仓库实现
#[derive(Clone)]
pub struct ActivityRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ActivityRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TryFrom<activity_entity::Model> for Activity {
    type Error = RepositoryError;

    fn try_from(model: activity_entity::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: model.kind.parse().map_err(|e| {
                RepositoryError::InvalidData(format!("activity {}: {}", model.id, e))
            })?,
            id: model.id,
            lead_id: model.lead_id,
            staff_id: model.staff_id,
            summary: model.summary,
            occurred_at: model.occurred_at,
        })
    }
}

impl From<Activity> for activity_entity::ActiveModel {
    fn from(activity: Activity) -> Self {
        Self {
            id: Set(activity.id),
            lead_id: Set(activity.lead_id),
            staff_id: Set(activity.staff_id),
            kind: Set(activity.kind.to_string()),
            summary: Set(activity.summary),
            occurred_at: Set(activity.occurred_at),
        }
    }
}

#[async_trait]
impl ActivityRepository for ActivityRepositoryImpl {
    async fn record(&self, activity: &Activity) -> Result<Activity, RepositoryError> {
        let txn = self.db.begin().await?;

        let model: activity_entity::ActiveModel = activity.clone().into();
        let inserted = model.insert(&txn).await.map_err(classify_write_error)?;

        if activity.promotes_lead() {
            let now: DateTime<FixedOffset> = Utc::now().into();
            let result = lead_entity::Entity::update_many()
                .col_expr(lead_entity::Column::Status, Expr::value(LEAD_STATUS_IN_PROGRESS))
                .col_expr(lead_entity::Column::UpdatedAt, Expr::value(now))
                .filter(lead_entity::Column::Id.eq(activity.lead_id.as_str()))
                .filter(lead_entity::Column::Status.eq(LEAD_STATUS_NEW))
                .exec(&txn)
                .await?;
            debug!(
                lead_id = %activity.lead_id,
                promoted = result.rows_affected > 0,
                "Lead status promotion checked"
            );
        }

        txn.commit().await?;

        inserted.try_into()
    }

    async fn list_by_lead(&self, lead_id: &str) -> Result<Vec<Activity>, RepositoryError> {
        activity_entity::Entity::find()
            .filter(activity_entity::Column::LeadId.eq(lead_id))
            .order_by_desc(activity_entity::Column::OccurredAt)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Activity::try_from)
            .collect()
    }

    async fn update_summary_owned(
        &self,
        id: &str,
        staff_id: &str,
        summary: Option<String>,
    ) -> Result<Option<Activity>, RepositoryError> {
        let Some(model) = activity_entity::Entity::find_by_id(id.to_string())
            .filter(activity_entity::Column::StaffId.eq(staff_id))
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let mut active: activity_entity::ActiveModel = model.into();
        active.summary = Set(summary);
        let updated = active
            .update(self.db.as_ref())
            .await
            .map_err(classify_write_error)?;

        updated.try_into().map(Some)
    }

    async fn delete_owned(&self, id: &str, staff_id: &str) -> Result<(), RepositoryError> {
        let result = activity_entity::Entity::delete_many()
            .filter(activity_entity::Column::Id.eq(id))
            .filter(activity_entity::Column::StaffId.eq(staff_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
