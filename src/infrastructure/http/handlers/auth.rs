//! Auth Handlers - 注册 / 登录 / 登出

use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{LoginUser, RegisterUser};
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::dto::{AuthResponseDto, MessageDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::Json;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponseDto>), ApiError> {
    let result = state
        .register_handler
        .handle(RegisterUser {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

/// login 字段同时接受用户名或邮箱
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponseDto>, ApiError> {
    let result = state
        .login_handler
        .handle(LoginUser {
            login: req.login,
            password: req.password,
        })
        .await?;

    Ok(Json(result.into()))
}

/// 登出。JWT 无服务端状态，令牌由客户端丢弃
pub async fn logout(_user: CurrentUser) -> Json<MessageDto> {
    Json(MessageDto {
        message: "登出成功",
    })
}
