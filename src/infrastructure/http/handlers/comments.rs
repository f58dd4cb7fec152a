//! Comment Handlers - 回复评论

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::ReplyComment;
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::dto::CommentDto;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::Json;
use crate::infrastructure::http::handlers::posts::comment_to_dto;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub content: String,
}

/// 回复指定评论，帖子归属继承自父评论
pub async fn reply_comment(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(comment_id): Path<i64>,
    Json(req): Json<ReplyRequest>,
) -> Result<(StatusCode, Json<CommentDto>), ApiError> {
    let comment = state
        .reply_comment_handler
        .handle(ReplyComment {
            parent_comment_id: comment_id,
            author_id: user.user_id,
            content: req.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment_to_dto(comment))))
}
