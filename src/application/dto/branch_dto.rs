// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::branch::Branch;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBranchRequest {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct BranchListResponse {
    pub branches: Vec<Branch>,
    pub total: usize,
}

impl From<Vec<Branch>> for BranchListResponse {
    fn from(branches: Vec<Branch>) -> Self {
        Self {
            total: branches.len(),
            branches,
        }
    }
}
