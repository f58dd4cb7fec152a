//! User Handlers - 用户资料

use axum::extract::{Path, State};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{GetUserProfile, UpdateProfile};
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::dto::UserProfileDto;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::Json;
use crate::infrastructure::http::state::AppState;

/// 获取本人完整资料（含邮箱）
pub async fn get_my_profile(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> Result<Json<UserProfileDto>, ApiError> {
    let profile = state
        .get_user_profile_handler
        .handle(GetUserProfile {
            user_id: user.user_id,
            include_email: true,
        })
        .await?;

    Ok(Json(profile.into()))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

pub async fn update_my_profile(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfileDto>, ApiError> {
    let profile = state
        .update_profile_handler
        .handle(UpdateProfile {
            user_id: user.user_id,
            avatar: req.avatar,
            bio: req.bio,
        })
        .await?;

    Ok(Json(profile.into()))
}

/// 获取指定用户的公开资料（不含邮箱）
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserProfileDto>, ApiError> {
    let profile = state
        .get_user_profile_handler
        .handle(GetUserProfile {
            user_id,
            include_email: false,
        })
        .await?;

    Ok(Json(profile.into()))
}
