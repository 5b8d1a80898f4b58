// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::follow_up::{select_due, FollowUpEntry};
use crate::domain::repositories::lead_repository::LeadRepository;
use crate::utils::errors::ServiceError;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;
use tracing::debug;

/// 回访到期计算服务
///
/// 从仓库取得候选线索及其最近回访时间，再由纯函数计算到期时间并筛选。
pub struct FollowUpService {
    lead_repo: Arc<dyn LeadRepository>,
}

impl FollowUpService {
    pub fn new(lead_repo: Arc<dyn LeadRepository>) -> Self {
        Self { lead_repo }
    }

    /// 计算用户在 `now` 当天需要进行的回访
    ///
    /// # 参数
    ///
    /// * `user_id` - 线索负责人ID
    /// * `now` - 当前时间，按其 UTC 日期判断是否到期
    ///
    /// # 返回值
    ///
    /// 按到期时间升序排列的回访条目
    pub async fn due_follow_ups(
        &self,
        user_id: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<Vec<FollowUpEntry>, ServiceError> {
        let candidates = self.lead_repo.find_follow_up_candidates(user_id).await?;
        let candidate_count = candidates.len();
        let due = select_due(candidates, now);

        debug!(
            user_id = %user_id,
            candidates = candidate_count,
            due = due.len(),
            "Computed follow-ups"
        );
        Ok(due)
    }
}
