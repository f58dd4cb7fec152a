//! 认证提取器
//!
//! 从 `Authorization: Bearer <token>` 头解析当前用户

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use super::error::ApiError;
use super::state::AppState;

/// 当前登录用户，受保护路由通过参数签名声明需要认证
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: i64,
}

#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("未提供认证令牌"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("未提供认证令牌"))?;

        let user_id = state.token_issuer.verify(token)?;

        // 令牌有效但用户可能已不存在
        let user = state.user_repo.find_by_id(user_id).await.map_err(|e| {
            tracing::error!(error = %e, "User lookup failed during authentication");
            ApiError::internal("认证过程出错")
        })?;
        if user.is_none() {
            return Err(ApiError::unauthorized("用户不存在"));
        }

        Ok(CurrentUser { user_id })
    }
}
