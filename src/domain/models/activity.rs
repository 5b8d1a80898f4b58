// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::models::task::DomainError;

/// 线索状态：新建
pub const LEAD_STATUS_NEW: &str = "New";
/// 线索状态：跟进中
pub const LEAD_STATUS_IN_PROGRESS: &str = "In Progress";

/// 活动类型
///
/// 任务类型与活动类型共用该枚举。`FollowUpCall` 是回访计算器
/// 识别"上一次回访"的依据。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Call,
    FollowUpCall,
    Email,
    Meeting,
    Whatsapp,
    Note,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Call => "call",
            ActivityKind::FollowUpCall => "follow_up_call",
            ActivityKind::Email => "email",
            ActivityKind::Meeting => "meeting",
            ActivityKind::Whatsapp => "whatsapp",
            ActivityKind::Note => "note",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(ActivityKind::Call),
            "follow_up_call" => Ok(ActivityKind::FollowUpCall),
            "email" => Ok(ActivityKind::Email),
            "meeting" => Ok(ActivityKind::Meeting),
            "whatsapp" => Ok(ActivityKind::Whatsapp),
            "note" => Ok(ActivityKind::Note),
            other => Err(DomainError::ValidationError(format!(
                "invalid kind '{}': expected one of call, follow_up_call, email, meeting, whatsapp, note",
                other
            ))),
        }
    }
}

/// 活动记录
///
/// 线索上发生过的一次接触，例如一次电话或一封邮件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub lead_id: String,
    /// 记录该活动的员工ID
    pub staff_id: Option<String>,
    pub kind: ActivityKind,
    pub summary: Option<String>,
    pub occurred_at: DateTime<FixedOffset>,
}

impl Activity {
    /// 创建一条发生于当前时刻的活动
    pub fn new(
        lead_id: String,
        staff_id: Option<String>,
        kind: ActivityKind,
        summary: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            lead_id,
            staff_id,
            kind,
            summary,
            occurred_at: Utc::now().into(),
        }
    }

    /// 是否会把 "New" 状态的线索推进到 "In Progress"
    ///
    /// 备注类活动不算作实际接触
    pub fn promotes_lead(&self) -> bool {
        self.kind != ActivityKind::Note
    }

    /// 是否由指定用户记录
    pub fn is_recorded_by(&self, user_id: &str) -> bool {
        self.staff_id.as_deref() == Some(user_id)
    }
}
