//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，携带对外错误码

use thiserror::Error;

use super::ports::{AuthError, RepositoryError};

/// 应用层错误
///
/// 每个变体携带 API 错误码（如 `POST_NOT_FOUND`）与用户可读消息
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 字段验证失败
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// 资源未找到
    #[error("{message}")]
    NotFound {
        code: &'static str,
        message: String,
    },

    /// 非法请求（如父评论不属于该帖子、未知任务类型）
    #[error("{message}")]
    BadRequest {
        code: &'static str,
        message: String,
    },

    /// 资源冲突（用户名/邮箱已存在）
    #[error("{message}")]
    Conflict {
        code: &'static str,
        message: String,
    },

    /// 登录凭据错误
    #[error("{0}")]
    InvalidCredentials(String),

    /// 无权限操作
    #[error("{0}")]
    Forbidden(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    Repository(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// 创建字段验证错误
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// 创建 NotFound 错误
    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    /// 创建 BadRequest 错误
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    /// 创建冲突错误
    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            message: message.into(),
        }
    }

    /// 创建无权限错误
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err.to_string())
    }
}

impl From<AuthError> for ApplicationError {
    fn from(err: AuthError) -> Self {
        Self::Internal(err.to_string())
    }
}
