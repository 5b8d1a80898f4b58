// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead::{LeadFilter, LeadPatch, NewLead};
use crate::domain::models::paging::Page;
use crate::utils::errors::ServiceError;
use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use serde::Deserialize;
use validator::Validate;

/// 创建线索请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeadRequest {
    pub inq_id: Option<String>,

    /// 客户姓名（至少 2 个字符）
    #[validate(length(min = 2, message = "full_name must be at least 2 characters"))]
    pub full_name: String,

    pub destination_country: Option<String>,
    pub branch_id: Option<String>,
    pub status: Option<String>,
    pub whatsapp_no: Option<String>,
    pub inquiry_date: Option<DateTime<FixedOffset>>,
    pub allocated_user_id: Option<String>,
    pub remarks: Option<String>,
}

impl CreateLeadRequest {
    pub fn into_new_lead(self) -> Result<NewLead, ServiceError> {
        self.validate()?;
        Ok(NewLead {
            inq_id: self.inq_id,
            full_name: self.full_name,
            destination_country: self.destination_country,
            branch_id: self.branch_id,
            status: self.status,
            whatsapp_no: self.whatsapp_no,
            inquiry_date: self.inquiry_date,
            allocated_user_id: self.allocated_user_id,
            remarks: self.remarks,
        })
    }
}

/// 线索部分更新请求，缺省字段保持原值
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLeadRequest {
    pub inq_id: Option<String>,
    #[validate(length(min = 2, message = "full_name must be at least 2 characters"))]
    pub full_name: Option<String>,
    pub destination_country: Option<String>,
    pub branch_id: Option<String>,
    pub status: Option<String>,
    pub whatsapp_no: Option<String>,
    pub inquiry_date: Option<DateTime<FixedOffset>>,
    pub allocated_user_id: Option<String>,
    pub remarks: Option<String>,
}

impl UpdateLeadRequest {
    pub fn into_patch(self) -> Result<LeadPatch, ServiceError> {
        self.validate()?;
        Ok(LeadPatch {
            inq_id: self.inq_id,
            full_name: self.full_name,
            destination_country: self.destination_country,
            branch_id: self.branch_id,
            status: self.status,
            whatsapp_no: self.whatsapp_no,
            inquiry_date: self.inquiry_date,
            allocated_user_id: self.allocated_user_id,
            remarks: self.remarks,
        })
    }
}

/// 线索列表查询参数
///
/// `from` 与 `to` 为 `YYYY-MM-DD` 格式的日期，两端都包含在内
#[derive(Debug, Default, Deserialize)]
pub struct LeadListQuery {
    pub country: Option<String>,
    pub status: Option<String>,
    pub allocated_to: Option<String>,
    pub q: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_day(field: &str, value: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ServiceError::Validation(format!("{} must be a date in YYYY-MM-DD format", field))
    })
}

fn start_of_day(day: NaiveDate) -> DateTime<FixedOffset> {
    day.and_time(chrono::NaiveTime::MIN).and_utc().fixed_offset()
}

impl LeadListQuery {
    /// 转换为仓库层过滤条件
    ///
    /// `to` 当天整天包含在内，因此上界取其次日零点（不含）
    pub fn into_filter(self) -> Result<LeadFilter, ServiceError> {
        let page = Page::from_raw(self.limit.as_deref(), self.offset.as_deref());

        let inquiry_from = non_empty(self.from)
            .map(|v| parse_day("from", &v).map(start_of_day))
            .transpose()?;

        let inquiry_before = non_empty(self.to)
            .map(|v| {
                let day = parse_day("to", &v)?;
                day.checked_add_days(Days::new(1))
                    .map(start_of_day)
                    .ok_or_else(|| ServiceError::Validation("to is out of range".to_string()))
            })
            .transpose()?;

        Ok(LeadFilter {
            country: non_empty(self.country),
            status: non_empty(self.status),
            allocated_to: non_empty(self.allocated_to),
            q: non_empty(self.q),
            inquiry_from,
            inquiry_before,
            limit: page.limit,
            offset: page.offset,
        })
    }
}
