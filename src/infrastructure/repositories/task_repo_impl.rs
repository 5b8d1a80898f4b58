// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::activity::Activity;
use crate::domain::models::paging::Page;
use crate::domain::models::task::{Task, TaskStatus, TaskView};
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::infrastructure::database::entities::{
    activity as activity_entity, task as task_entity, user as user_entity,
};
use crate::infrastructure::repositories::classify_write_error;
use async_trait::async_trait;
use sea_orm::{
    sea_query::{NullOrdering, Order},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;

/// 任务仓库实现
///
/// 基于SeaORM实现的任务数据访问层
#[derive(Clone)]
pub struct TaskRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    /// 创建新的任务仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的任务仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TryFrom<task_entity::Model> for Task {
    type Error = RepositoryError;

    fn try_from(model: task_entity::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: model
                .kind
                .parse()
                .map_err(|e| RepositoryError::InvalidData(format!("task {}: {}", model.id, e)))?,
            status: model
                .status
                .parse()
                .map_err(|e| RepositoryError::InvalidData(format!("task {}: {}", model.id, e)))?,
            id: model.id,
            lead_id: model.lead_id,
            title: model.title,
            due_date: model.due_date,
            assigned_to: model.assigned_to,
            created_at: model.created_at,
        })
    }
}

impl From<Task> for task_entity::ActiveModel {
    fn from(task: Task) -> Self {
        Self {
            id: Set(task.id),
            lead_id: Set(task.lead_id),
            title: Set(task.title),
            due_date: Set(task.due_date),
            kind: Set(task.kind.to_string()),
            status: Set(task.status.to_string()),
            assigned_to: Set(task.assigned_to),
            created_at: Set(task.created_at),
        }
    }
}

fn into_views(
    rows: Vec<(task_entity::Model, Option<user_entity::Model>)>,
) -> Result<Vec<TaskView>, RepositoryError> {
    rows.into_iter()
        .map(|(task, assignee)| {
            Ok(TaskView {
                task: task.try_into()?,
                assigned_to_name: assignee.map(|u| u.name),
            })
        })
        .collect()
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError> {
        let model: task_entity::ActiveModel = task.clone().into();

        model
            .insert(self.db.as_ref())
            .await
            .map_err(classify_write_error)?
            .try_into()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, RepositoryError> {
        let model = task_entity::Entity::find_by_id(id.to_string())
            .one(self.db.as_ref())
            .await?;

        model.map(Task::try_from).transpose()
    }

    async fn list_by_lead(&self, lead_id: &str) -> Result<Vec<TaskView>, RepositoryError> {
        let rows = task_entity::Entity::find()
            .find_also_related(user_entity::Entity)
            .filter(task_entity::Column::LeadId.eq(lead_id))
            .order_by_desc(task_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        into_views(rows)
    }

    async fn save_with_completion(
        &self,
        task: &Task,
        completion: Option<&Activity>,
    ) -> Result<Task, RepositoryError> {
        let txn = self.db.begin().await?;

        let model: task_entity::ActiveModel = task.clone().into();
        let updated = model.update(&txn).await.map_err(classify_write_error)?;

        if let Some(activity) = completion {
            let activity_model: activity_entity::ActiveModel = activity.clone().into();
            activity_model
                .insert(&txn)
                .await
                .map_err(classify_write_error)?;
            debug!(task_id = %task.id, activity_id = %activity.id, "Completion activity inserted");
        }

        txn.commit().await?;

        updated.try_into()
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = task_entity::Entity::delete_by_id(id.to_string())
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn find_open_assigned(
        &self,
        user_id: &str,
        page: Page,
    ) -> Result<(Vec<TaskView>, u64), RepositoryError> {
        let open_states = TaskStatus::OPEN_STATES.map(|s| s.to_string());

        let total = task_entity::Entity::find()
            .filter(task_entity::Column::AssignedTo.eq(user_id))
            .filter(task_entity::Column::Status.is_in(open_states.clone()))
            .count(self.db.as_ref())
            .await?;

        let rows = task_entity::Entity::find()
            .find_also_related(user_entity::Entity)
            .filter(task_entity::Column::AssignedTo.eq(user_id))
            .filter(task_entity::Column::Status.is_in(open_states))
            .order_by_with_nulls(task_entity::Column::DueDate, Order::Asc, NullOrdering::Last)
            .order_by_desc(task_entity::Column::CreatedAt)
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db.as_ref())
            .await?;

        Ok((into_views(rows)?, total))
    }
}
