//! Post Handlers - 帖子 CRUD、点赞与评论

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{
    CreateComment, CreatePost, DeletePost, GetPost, GetPostComments, LikePost, ListPosts,
    PostSort, UpdatePost,
};
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::dto::{
    CommentDto, LikeResponseDto, MessageDto, PostDetailDto, PostListResponseDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{Json, Query};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// List / Get
// ============================================================================

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// `time`（默认）或 `hot`
    #[serde(default)]
    pub sort: String,
    #[serde(rename = "category")]
    pub category_id: Option<i64>,
    pub tag: Option<String>,
}

pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<PostListResponseDto>, ApiError> {
    let page = query.page.max(1);
    let limit = query.limit;

    let result = state
        .list_posts_handler
        .handle(ListPosts {
            page,
            limit,
            sort: PostSort::parse(&query.sort),
            category_id: query.category_id,
            tag: query.tag,
        })
        .await?;

    Ok(Json(PostListResponseDto::new(result, page, limit)))
}

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<PostDetailDto>, ApiError> {
    let detail = state.get_post_handler.handle(GetPost { post_id }).await?;
    Ok(Json(detail.into()))
}

// ============================================================================
// Create / Update / Delete
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostDetailDto>), ApiError> {
    let detail = state
        .create_post_handler
        .handle(CreatePost {
            author_id: user.user_id,
            title: req.title,
            content: req.content,
            category_id: req.category_id,
            tags: req.tags,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(detail.into())))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<i64>,
    pub tags: Option<Vec<String>>,
}

pub async fn update_post(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(post_id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<PostDetailDto>, ApiError> {
    let detail = state
        .update_post_handler
        .handle(UpdatePost {
            post_id,
            editor_id: user.user_id,
            title: req.title,
            content: req.content,
            category_id: req.category_id,
            tags: req.tags,
        })
        .await?;

    Ok(Json(detail.into()))
}

pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(post_id): Path<i64>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .delete_post_handler
        .handle(DeletePost {
            post_id,
            editor_id: user.user_id,
        })
        .await?;

    Ok(Json(MessageDto {
        message: "帖子已删除",
    }))
}

// ============================================================================
// Like
// ============================================================================

pub async fn like_post(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(post_id): Path<i64>,
) -> Result<Json<LikeResponseDto>, ApiError> {
    let result = state
        .like_post_handler
        .handle(LikePost {
            post_id,
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(LikeResponseDto {
        post_id: result.post_id,
        like_count: result.like_count,
    }))
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsQuery {
    #[serde(default = "default_page")]
    pub page: u32,
}

pub async fn get_post_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Query(query): Query<CommentsQuery>,
) -> Result<Json<Vec<CommentDto>>, ApiError> {
    let page = query.page.max(1);
    let result = state
        .get_post_comments_handler
        .handle(GetPostComments { post_id, page })
        .await?;

    Ok(Json(result.comments.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub parent_id: Option<i64>,
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(post_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentDto>), ApiError> {
    let comment = state
        .create_comment_handler
        .handle(CreateComment {
            post_id,
            author_id: user.user_id,
            content: req.content,
            parent_id: req.parent_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment_to_dto(comment))))
}

/// 新建评论没有回复，直接包装为空子树节点
pub(super) fn comment_to_dto(comment: crate::application::CommentRecord) -> CommentDto {
    CommentDto::from(crate::application::CommentNode {
        comment,
        replies: Vec::new(),
    })
}
