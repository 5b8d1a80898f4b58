// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 线索备注，只允许作者本人修改和删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadNote {
    pub id: String,
    pub lead_id: String,
    pub body: String,
    pub created_by: String,
    pub created_at: DateTime<FixedOffset>,
}

impl LeadNote {
    pub fn new(lead_id: String, body: String, created_by: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            lead_id,
            body,
            created_by,
            created_at: Utc::now().into(),
        }
    }
}
