//! HTTP Error Handling
//!
//! 统一错误响应格式 `{"error": CODE, "message": ...}`，
//! 字段验证失败时附带 `details` 数组

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, AuthError};

/// 单个字段的验证错误
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// 统一错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// API 错误
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    details: Option<Vec<FieldError>>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, error = %self.message, "Internal server error");
        } else {
            tracing::warn!(
                code = self.code,
                status = self.status.as_u16(),
                error = %self.message,
                "Request rejected"
            );
        }

        let body = ErrorBody {
            error: self.code,
            message: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Validation { field, message } => Self {
                status: StatusCode::BAD_REQUEST,
                code: "VALIDATION_ERROR",
                message: message.clone(),
                details: Some(vec![FieldError { field, message }]),
            },
            ApplicationError::NotFound { code, message } => {
                Self::new(StatusCode::NOT_FOUND, code, message)
            }
            ApplicationError::BadRequest { code, message }
            | ApplicationError::Conflict { code, message } => {
                Self::new(StatusCode::BAD_REQUEST, code, message)
            }
            ApplicationError::InvalidCredentials(message) => {
                Self::new(StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", message)
            }
            ApplicationError::Forbidden(message) => {
                Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", message)
            }
            ApplicationError::Repository(message) | ApplicationError::Internal(message) => {
                // 内部细节只进日志，不回给客户端
                tracing::error!(error = %message, "Application internal error");
                Self::internal("服务器内部错误")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::TokenExpired => Self::unauthorized("认证令牌已过期"),
            AuthError::InvalidToken => Self::unauthorized("无效的认证令牌"),
            AuthError::HashingError(msg) | AuthError::TokenError(msg) => {
                tracing::error!(error = %msg, "Auth infrastructure error");
                Self::internal("服务器内部错误")
            }
        }
    }
}
