//! Post Command Handlers - 帖子写操作

use std::sync::Arc;

use crate::application::commands::{CreatePost, DeletePost, LikePost, UpdatePost};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    CategoryRepositoryPort, NewPost, PostDetailRecord, PostPatch, PostRepositoryPort,
};
use crate::domain::{generate_excerpt, PostContent, PostTitle, TagName};

/// 校验标签数组，返回规范化后的标签名
fn validate_tags(tags: Vec<String>) -> Result<Vec<String>, ApplicationError> {
    tags.into_iter()
        .map(|t| {
            TagName::new(t)
                .map(TagName::into_string)
                .map_err(|e| ApplicationError::validation("tags", e))
        })
        .collect()
}

// ============================================================================
// CreatePost
// ============================================================================

/// CreatePost Handler
pub struct CreatePostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl CreatePostHandler {
    pub fn new(
        post_repo: Arc<dyn PostRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            post_repo,
            category_repo,
        }
    }

    pub async fn handle(&self, command: CreatePost) -> Result<PostDetailRecord, ApplicationError> {
        let title =
            PostTitle::new(command.title).map_err(|e| ApplicationError::validation("title", e))?;
        let content = PostContent::new(command.content)
            .map_err(|e| ApplicationError::validation("content", e))?;
        let tags = validate_tags(command.tags)?;

        // 分类必须存在
        if self
            .category_repo
            .find_by_id(command.category_id)
            .await?
            .is_none()
        {
            return Err(ApplicationError::bad_request(
                "CATEGORY_NOT_FOUND",
                "分类不存在",
            ));
        }

        let excerpt = generate_excerpt(content.as_str());

        let post_id = self
            .post_repo
            .create(NewPost {
                title: title.into_string(),
                content: content.into_string(),
                excerpt,
                author_id: command.author_id,
                category_id: command.category_id,
                tags,
            })
            .await?;

        tracing::info!(post_id, author_id = command.author_id, "Post created");

        self.post_repo
            .find_detail(post_id)
            .await?
            .ok_or_else(|| ApplicationError::internal("Post vanished after insert"))
    }
}

// ============================================================================
// UpdatePost
// ============================================================================

/// UpdatePost Handler
pub struct UpdatePostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl UpdatePostHandler {
    pub fn new(
        post_repo: Arc<dyn PostRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            post_repo,
            category_repo,
        }
    }

    pub async fn handle(&self, command: UpdatePost) -> Result<PostDetailRecord, ApplicationError> {
        let post = self
            .post_repo
            .find_detail(command.post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("POST_NOT_FOUND", "帖子不存在"))?;

        // 只有作者可以编辑
        if post.summary.author_id != command.editor_id {
            return Err(ApplicationError::forbidden("无权限编辑此帖子"));
        }

        let title = command
            .title
            .map(|t| PostTitle::new(t).map(PostTitle::into_string))
            .transpose()
            .map_err(|e| ApplicationError::validation("title", e))?;
        let content = command
            .content
            .map(|c| PostContent::new(c).map(PostContent::into_string))
            .transpose()
            .map_err(|e| ApplicationError::validation("content", e))?;
        let tags = command.tags.map(validate_tags).transpose()?;

        if let Some(category_id) = command.category_id {
            if self.category_repo.find_by_id(category_id).await?.is_none() {
                return Err(ApplicationError::bad_request(
                    "CATEGORY_NOT_FOUND",
                    "分类不存在",
                ));
            }
        }

        // 内容变更时同步重算摘要
        let excerpt = content.as_deref().map(generate_excerpt);

        self.post_repo
            .update(
                command.post_id,
                PostPatch {
                    title,
                    content,
                    excerpt,
                    category_id: command.category_id,
                    tags,
                },
            )
            .await?;

        tracing::info!(post_id = command.post_id, "Post updated");

        self.post_repo
            .find_detail(command.post_id)
            .await?
            .ok_or_else(|| ApplicationError::internal("Post vanished after update"))
    }
}

// ============================================================================
// DeletePost
// ============================================================================

/// DeletePost Handler
pub struct DeletePostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl DeletePostHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, command: DeletePost) -> Result<(), ApplicationError> {
        let post = self
            .post_repo
            .find_detail(command.post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("POST_NOT_FOUND", "帖子不存在"))?;

        // 只有作者可以删除
        if post.summary.author_id != command.editor_id {
            return Err(ApplicationError::forbidden("无权限删除此帖子"));
        }

        self.post_repo.delete(command.post_id).await?;

        tracing::info!(post_id = command.post_id, "Post deleted");

        Ok(())
    }
}

// ============================================================================
// LikePost
// ============================================================================

/// 点赞响应
#[derive(Debug, Clone)]
pub struct LikePostResponse {
    pub post_id: i64,
    pub like_count: i64,
}

/// LikePost Handler
pub struct LikePostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl LikePostHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, command: LikePost) -> Result<LikePostResponse, ApplicationError> {
        let like_count = self
            .post_repo
            .increment_like_count(command.post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("POST_NOT_FOUND", "帖子不存在"))?;

        tracing::debug!(
            post_id = command.post_id,
            user_id = command.user_id,
            like_count,
            "Post liked"
        );

        Ok(LikePostResponse {
            post_id: command.post_id,
            like_count,
        })
    }
}
