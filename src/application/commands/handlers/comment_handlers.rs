//! Comment Command Handlers - 评论写操作

use std::sync::Arc;

use crate::application::commands::{CreateComment, ReplyComment};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    CommentRecord, CommentRepositoryPort, NewComment, PostRepositoryPort,
};
use crate::domain::CommentContent;

// ============================================================================
// CreateComment
// ============================================================================

/// CreateComment Handler
pub struct CreateCommentHandler {
    comment_repo: Arc<dyn CommentRepositoryPort>,
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl CreateCommentHandler {
    pub fn new(
        comment_repo: Arc<dyn CommentRepositoryPort>,
        post_repo: Arc<dyn PostRepositoryPort>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }

    pub async fn handle(&self, command: CreateComment) -> Result<CommentRecord, ApplicationError> {
        let content = CommentContent::new(command.content)
            .map_err(|e| ApplicationError::validation("content", e))?;

        // 帖子必须存在
        if self
            .post_repo
            .find_detail(command.post_id)
            .await?
            .is_none()
        {
            return Err(ApplicationError::not_found("POST_NOT_FOUND", "帖子不存在"));
        }

        // 父评论必须存在且属于同一帖子
        if let Some(parent_id) = command.parent_id {
            let parent = self
                .comment_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| {
                    ApplicationError::not_found("COMMENT_NOT_FOUND", "父评论不存在")
                })?;
            if parent.post_id != command.post_id {
                return Err(ApplicationError::bad_request(
                    "INVALID_PARENT",
                    "父评论不属于该帖子",
                ));
            }
        }

        let comment = self
            .comment_repo
            .create(NewComment {
                post_id: command.post_id,
                parent_id: command.parent_id,
                author_id: command.author_id,
                content: content.into_string(),
            })
            .await?;

        tracing::info!(
            comment_id = comment.id,
            post_id = command.post_id,
            author_id = command.author_id,
            "Comment created"
        );

        Ok(comment)
    }
}

// ============================================================================
// ReplyComment
// ============================================================================

/// ReplyComment Handler
pub struct ReplyCommentHandler {
    comment_repo: Arc<dyn CommentRepositoryPort>,
}

impl ReplyCommentHandler {
    pub fn new(comment_repo: Arc<dyn CommentRepositoryPort>) -> Self {
        Self { comment_repo }
    }

    pub async fn handle(&self, command: ReplyComment) -> Result<CommentRecord, ApplicationError> {
        let content = CommentContent::new(command.content)
            .map_err(|e| ApplicationError::validation("content", e))?;

        let parent = self
            .comment_repo
            .find_by_id(command.parent_comment_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("COMMENT_NOT_FOUND", "评论不存在"))?;

        // 帖子 ID 继承自父评论
        let comment = self
            .comment_repo
            .create(NewComment {
                post_id: parent.post_id,
                parent_id: Some(parent.id),
                author_id: command.author_id,
                content: content.into_string(),
            })
            .await?;

        tracing::info!(
            comment_id = comment.id,
            parent_id = parent.id,
            post_id = parent.post_id,
            "Comment reply created"
        );

        Ok(comment)
    }
}
