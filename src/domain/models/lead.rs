// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 销售线索
///
/// `status` 为自由文本，由前端约定取值（如 "New"、"In Progress"、"Closed"）。
/// `allocated_user_id` 指向负责回访的用户。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub inq_id: Option<String>,
    pub full_name: String,
    pub destination_country: Option<String>,
    pub branch_id: Option<String>,
    pub status: Option<String>,
    pub whatsapp_no: Option<String>,
    pub inquiry_date: Option<DateTime<FixedOffset>>,
    pub allocated_user_id: Option<String>,
    pub remarks: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// 新建线索所需字段
#[derive(Debug, Clone, Default)]
pub struct NewLead {
    pub inq_id: Option<String>,
    pub full_name: String,
    pub destination_country: Option<String>,
    pub branch_id: Option<String>,
    pub status: Option<String>,
    pub whatsapp_no: Option<String>,
    pub inquiry_date: Option<DateTime<FixedOffset>>,
    pub allocated_user_id: Option<String>,
    pub remarks: Option<String>,
}

/// 线索部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Default)]
pub struct LeadPatch {
    pub inq_id: Option<String>,
    pub full_name: Option<String>,
    pub destination_country: Option<String>,
    pub branch_id: Option<String>,
    pub status: Option<String>,
    pub whatsapp_no: Option<String>,
    pub inquiry_date: Option<DateTime<FixedOffset>>,
    pub allocated_user_id: Option<String>,
    pub remarks: Option<String>,
}

/// 线索列表过滤条件
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    /// 目的国家，大小写不敏感的包含匹配
    pub country: Option<String>,
    /// 状态，精确匹配
    pub status: Option<String>,
    pub allocated_to: Option<String>,
    /// 在姓名、WhatsApp 号码和询盘编号中做包含匹配
    pub q: Option<String>,
    /// 询盘日期下界（含）
    pub inquiry_from: Option<DateTime<FixedOffset>>,
    /// 询盘日期上界（不含）
    pub inquiry_before: Option<DateTime<FixedOffset>>,
    pub limit: u64,
    pub offset: u64,
}

impl Lead {
    pub fn new(new_lead: NewLead) -> Self {
        let now: DateTime<FixedOffset> = Utc::now().into();
        Self {
            id: Uuid::new_v4().to_string(),
            inq_id: new_lead.inq_id,
            full_name: new_lead.full_name,
            destination_country: new_lead.destination_country,
            branch_id: new_lead.branch_id,
            status: new_lead.status,
            whatsapp_no: new_lead.whatsapp_no,
            inquiry_date: new_lead.inquiry_date,
            allocated_user_id: new_lead.allocated_user_id,
            remarks: new_lead.remarks,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: LeadPatch) {
        if patch.inq_id.is_some() {
            self.inq_id = patch.inq_id;
        }
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if patch.destination_country.is_some() {
            self.destination_country = patch.destination_country;
        }
        if patch.branch_id.is_some() {
            self.branch_id = patch.branch_id;
        }
        if patch.status.is_some() {
            self.status = patch.status;
        }
        if patch.whatsapp_no.is_some() {
            self.whatsapp_no = patch.whatsapp_no;
        }
        if patch.inquiry_date.is_some() {
            self.inquiry_date = patch.inquiry_date;
        }
        if patch.allocated_user_id.is_some() {
            self.allocated_user_id = patch.allocated_user_id;
        }
        if patch.remarks.is_some() {
            self.remarks = patch.remarks;
        }
        self.updated_at = Utc::now().into();
    }
}
