// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::{Activity, ActivityKind};
use crate::utils::errors::ServiceError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 记录活动请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateActivityRequest {
    #[validate(length(min = 2, message = "kind is required"))]
    pub kind: String,
    pub summary: Option<String>,
}

impl CreateActivityRequest {
    /// 校验并拆分为活动类型与摘要
    pub fn into_parts(self) -> Result<(ActivityKind, Option<String>), ServiceError> {
        self.validate()?;
        Ok((self.kind.parse()?, self.summary))
    }
}

/// 更新活动摘要请求，缺省时清空摘要
#[derive(Debug, Default, Deserialize)]
pub struct UpdateActivityRequest {
    pub summary: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    pub activities: Vec<Activity>,
    pub total_count: usize,
}

impl From<Vec<Activity>> for ActivityListResponse {
    fn from(activities: Vec<Activity>) -> Self {
        Self {
            total_count: activities.len(),
            activities,
        }
    }
}
