// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead_note::LeadNote;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建或修改备注请求
#[derive(Debug, Deserialize, Validate)]
pub struct LeadNoteRequest {
    /// 备注正文（至少 2 个字符）
    #[validate(length(min = 2, message = "body must be at least 2 characters"))]
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct LeadNoteListResponse {
    pub notes: Vec<LeadNote>,
    pub total_count: usize,
}

impl From<Vec<LeadNote>> for LeadNoteListResponse {
    fn from(notes: Vec<LeadNote>) -> Self {
        Self {
            total_count: notes.len(),
            notes,
        }
    }
}
