// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::models::task::DomainError;
use crate::domain::repositories::task_repository::RepositoryError;

/// 服务层错误类型
///
/// 各领域服务统一返回该类型，表现层据此选择 HTTP 状态码。
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 输入不合法
    #[error("{0}")]
    Validation(String),

    /// 缺少或无法识别操作者
    #[error("unauthorized")]
    Unauthorized,

    /// 操作者无权执行该操作
    #[error("forbidden")]
    Forbidden,

    /// 目标资源不存在，参数为资源名称
    #[error("{0} not found")]
    NotFound(&'static str),

    /// 与已有数据冲突
    #[error("{0}")]
    Conflict(String),

    /// 仓库层错误
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// 其他内部错误
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// 把仓库的 `NotFound` 转换为指定资源的 `NotFound`
    pub fn not_found_as(resource: &'static str) -> impl Fn(RepositoryError) -> ServiceError {
        move |err| match err {
            RepositoryError::NotFound => ServiceError::NotFound(resource),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => ServiceError::Validation(msg),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .next()
                    .unwrap_or_else(|| {
                        errs.first()
                            .map(|e| e.code.to_string())
                            .unwrap_or_default()
                    });
                format!("{}: {}", field, detail)
            })
            .collect();
        fields.sort();
        ServiceError::Validation(format!("validation failed: {}", fields.join(", ")))
    }
}
