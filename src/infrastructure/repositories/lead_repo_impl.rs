// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::ActivityKind;
use crate::domain::models::follow_up::{FollowUpCandidate, CLOSED_LEAD_STATUSES};
use crate::domain::models::lead::{Lead, LeadFilter};
use crate::domain::repositories::lead_repository::LeadRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::{activity as activity_entity, lead as lead_entity};
use crate::infrastructure::repositories::classify_write_error;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Select, Set,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 线索仓库实现
///
/// 基于SeaORM实现线索的增删改查以及回访候选查询
#[derive(Clone)]
pub struct LeadRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl LeadRepositoryImpl {
    /// 创建新的线索仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 取各候选线索最近一次回访电话的时间
    async fn last_follow_up_calls(
        &self,
        user_id: &str,
    ) -> Result<HashMap<String, DateTime<FixedOffset>>, RepositoryError> {
        let rows: Vec<(String, DateTime<FixedOffset>)> = follow_up_calls_query(user_id)
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        let mut latest: HashMap<String, DateTime<FixedOffset>> = HashMap::new();
        for (lead_id, occurred_at) in rows {
            latest
                .entry(lead_id)
                .and_modify(|current| {
                    if occurred_at > *current {
                        *current = occurred_at;
                    }
                })
                .or_insert(occurred_at);
        }
        Ok(latest)
    }
}

/// 回访候选条件：分配给该用户且状态为空或未关闭
fn candidate_condition(user_id: &str) -> Condition {
    Condition::all()
        .add(lead_entity::Column::AllocatedUserId.eq(user_id))
        .add(
            Condition::any()
                .add(lead_entity::Column::Status.is_null())
                .add(lead_entity::Column::Status.is_not_in(CLOSED_LEAD_STATUSES)),
        )
}

/// 候选线索的全部回访电话 `(lead_id, occurred_at)`
///
/// 线索范围以子查询表达，绑定参数个数与候选线索数量无关
fn follow_up_calls_query(user_id: &str) -> Select<activity_entity::Entity> {
    let candidate_ids = lead_entity::Entity::find()
        .select_only()
        .column(lead_entity::Column::Id)
        .filter(candidate_condition(user_id))
        .into_query();

    activity_entity::Entity::find()
        .select_only()
        .column(activity_entity::Column::LeadId)
        .column(activity_entity::Column::OccurredAt)
        .filter(activity_entity::Column::Kind.eq(ActivityKind::FollowUpCall.as_str()))
        .filter(activity_entity::Column::LeadId.in_subquery(candidate_ids))
}

impl From<lead_entity::Model> for Lead {
    fn from(model: lead_entity::Model) -> Self {
        Self {
            id: model.id,
            inq_id: model.inq_id,
            full_name: model.full_name,
            destination_country: model.destination_country,
            branch_id: model.branch_id,
            status: model.status,
            whatsapp_no: model.whatsapp_no,
            inquiry_date: model.inquiry_date,
            allocated_user_id: model.allocated_user_id,
            remarks: model.remarks,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Lead> for lead_entity::ActiveModel {
    fn from(lead: Lead) -> Self {
        Self {
            id: Set(lead.id),
            inq_id: Set(lead.inq_id),
            full_name: Set(lead.full_name),
            destination_country: Set(lead.destination_country),
            branch_id: Set(lead.branch_id),
            status: Set(lead.status),
            whatsapp_no: Set(lead.whatsapp_no),
            inquiry_date: Set(lead.inquiry_date),
            allocated_user_id: Set(lead.allocated_user_id),
            remarks: Set(lead.remarks),
            created_at: Set(lead.created_at),
            updated_at: Set(lead.updated_at),
        }
    }
}

fn filter_condition(filter: &LeadFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(country) = filter.country.as_deref() {
        let pattern = format!("%{}%", country.to_lowercase());
        condition = condition.add(
            Expr::expr(Func::lower(Expr::col((
                lead_entity::Entity,
                lead_entity::Column::DestinationCountry,
            ))))
            .like(pattern),
        );
    }
    if let Some(status) = filter.status.as_deref() {
        condition = condition.add(lead_entity::Column::Status.eq(status));
    }
    if let Some(allocated_to) = filter.allocated_to.as_deref() {
        condition = condition.add(lead_entity::Column::AllocatedUserId.eq(allocated_to));
    }
    if let Some(q) = filter.q.as_deref() {
        condition = condition.add(
            Condition::any()
                .add(lead_entity::Column::FullName.contains(q))
                .add(lead_entity::Column::WhatsappNo.contains(q))
                .add(lead_entity::Column::InqId.contains(q)),
        );
    }
    if let Some(from) = filter.inquiry_from {
        condition = condition.add(lead_entity::Column::InquiryDate.gte(from));
    }
    if let Some(before) = filter.inquiry_before {
        condition = condition.add(lead_entity::Column::InquiryDate.lt(before));
    }

    condition
}

#[async_trait]
impl LeadRepository for LeadRepositoryImpl {
    async fn create(&self, lead: &Lead) -> Result<Lead, RepositoryError> {
        let model: lead_entity::ActiveModel = lead.clone().into();
        let inserted = model
            .insert(self.db.as_ref())
            .await
            .map_err(classify_write_error)?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Lead>, RepositoryError> {
        let model = lead_entity::Entity::find_by_id(id.to_string())
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Lead::from))
    }

    async fn update(&self, lead: &Lead) -> Result<Lead, RepositoryError> {
        let model: lead_entity::ActiveModel = lead.clone().into();
        let updated = model
            .update(self.db.as_ref())
            .await
            .map_err(classify_write_error)?;
        Ok(updated.into())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = lead_entity::Entity::delete_by_id(id.to_string())
            .exec(self.db.as_ref())
            .await?;
        debug!(lead_id = %id, rows = result.rows_affected, "Lead delete executed");
        Ok(())
    }

    async fn list(&self, filter: &LeadFilter) -> Result<Vec<Lead>, RepositoryError> {
        let models = lead_entity::Entity::find()
            .filter(filter_condition(filter))
            .order_by_desc(lead_entity::Column::CreatedAt)
            .limit(filter.limit)
            .offset(filter.offset)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Lead::from).collect())
    }

    async fn find_follow_up_candidates(
        &self,
        user_id: &str,
    ) -> Result<Vec<FollowUpCandidate>, RepositoryError> {
        let leads = lead_entity::Entity::find()
            .filter(candidate_condition(user_id))
            .all(self.db.as_ref())
            .await?;

        if leads.is_empty() {
            return Ok(Vec::new());
        }

        let latest = self.last_follow_up_calls(user_id).await?;

        Ok(leads
            .into_iter()
            .map(|lead| FollowUpCandidate {
                last_follow_up_at: latest.get(&lead.id).copied(),
                lead_id: lead.id,
                lead_name: lead.full_name,
                lead_status: lead.status,
                inquiry_date: lead.inquiry_date,
                created_at: lead.created_at,
                allocated_to: lead.allocated_user_id,
            })
            .collect())
    }
}
