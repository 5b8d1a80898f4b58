// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::Serialize;

/// 两次回访之间的间隔天数
pub const FOLLOW_UP_INTERVAL_DAYS: i64 = 3;

/// 不再需要回访的线索状态
///
/// 大小写敏感，按字面值比较
pub const CLOSED_LEAD_STATUSES: [&str; 3] = ["done", "cancelled", "Closed"];

/// 回访候选线索
///
/// 已分配给目标用户且状态未关闭的线索，附带其最近一次回访电话时间。
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUpCandidate {
    pub lead_id: String,
    pub lead_name: String,
    pub lead_status: Option<String>,
    pub inquiry_date: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub allocated_to: Option<String>,
    pub last_follow_up_at: Option<DateTime<FixedOffset>>,
}

/// 已到期的回访条目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowUpEntry {
    pub lead_id: String,
    pub lead_name: String,
    pub lead_status: Option<String>,
    pub last_follow_up_at: Option<DateTime<FixedOffset>>,
    pub due_at: DateTime<FixedOffset>,
    pub allocated_to: Option<String>,
}

/// 状态是否属于关闭集合
pub fn is_closed_status(status: Option<&str>) -> bool {
    status.is_some_and(|s| CLOSED_LEAD_STATUSES.contains(&s))
}

impl FollowUpCandidate {
    /// 计算下一次回访的到期时间
    ///
    /// 依次取最近回访时间、询盘日期、创建时间中第一个存在的值，再加上间隔天数
    pub fn due_at(&self) -> DateTime<FixedOffset> {
        let anchor = self
            .last_follow_up_at
            .or(self.inquiry_date)
            .unwrap_or(self.created_at);
        anchor + Duration::days(FOLLOW_UP_INTERVAL_DAYS)
    }

    fn into_entry(self, due_at: DateTime<FixedOffset>) -> FollowUpEntry {
        FollowUpEntry {
            lead_id: self.lead_id,
            lead_name: self.lead_name,
            lead_status: self.lead_status,
            last_follow_up_at: self.last_follow_up_at,
            due_at,
            allocated_to: self.allocated_to,
        }
    }
}

/// 从候选线索中筛选出截至 `now` 当天已到期的回访
///
/// 按 UTC 日期比较，而非精确时间戳。结果按到期时间升序排列。
/// 状态属于关闭集合的候选会被再次排除。
///
/// # 参数
///
/// * `candidates` - 候选线索
/// * `now` - 当前时间
///
/// # 返回值
///
/// 返回已到期的回访条目列表
pub fn select_due(
    candidates: Vec<FollowUpCandidate>,
    now: DateTime<FixedOffset>,
) -> Vec<FollowUpEntry> {
    let today = now.with_timezone(&Utc).date_naive();

    let mut due: Vec<FollowUpEntry> = candidates
        .into_iter()
        .filter(|c| !is_closed_status(c.lead_status.as_deref()))
        .filter_map(|c| {
            let due_at = c.due_at();
            (due_at.with_timezone(&Utc).date_naive() <= today).then(|| c.into_entry(due_at))
        })
        .collect();

    due.sort_by(|a, b| a.due_at.cmp(&b.due_at));
    due
}
