// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 默认分页大小
pub const DEFAULT_LIMIT: u64 = 50;
/// 允许的最大分页大小
pub const MAX_LIMIT: u64 = 200;

/// 分页参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// 从原始查询参数构造分页
    ///
    /// 缺失、无法解析、不大于 0 或超过上限的 `limit` 回落为 50；
    /// 缺失、无法解析或为负的 `offset` 回落为 0。
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0 && *v as u64 <= MAX_LIMIT)
            .map(|v| v as u64)
            .unwrap_or(DEFAULT_LIMIT);

        let offset = offset
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v >= 0)
            .map(|v| v as u64)
            .unwrap_or(0);

        Self { limit, offset }
    }
}
