//! Request Extractors - 参数解析
//!
//! 包装 axum 的 `Query` / `Json`，解析失败时返回与其余接口一致的
//! `{"error": "VALIDATION_ERROR", "message": ...}` 响应体，
//! 而不是 axum 默认的纯文本 400/422

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::infrastructure::http::error::ApiError;

/// 查询参数提取器
#[derive(Debug)]
pub struct Query<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(validation_error(rejection.body_text())),
        }
    }
}

/// JSON 请求体提取器，响应方向等价于 `axum::Json`
#[derive(Debug)]
pub struct Json<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(validation_error(rejection.body_text())),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

fn validation_error(detail: String) -> ApiError {
    tracing::debug!(detail = %detail, "Request deserialization failed");
    ApiError::new(
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        "请求参数格式错误",
    )
}
