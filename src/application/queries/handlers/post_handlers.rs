//! Post Query Handlers - 帖子列表/详情/评论树

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    CommentRecord, CommentRepositoryPort, PostDetailRecord, PostListFilter, PostListPage,
    PostRepositoryPort,
};
use crate::application::queries::{
    GetPost, GetPostComments, ListPosts, COMMENTS_PER_PAGE, MAX_PAGE_LIMIT,
};

// ============================================================================
// ListPosts
// ============================================================================

/// ListPosts Handler
pub struct ListPostsHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl ListPostsHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, query: ListPosts) -> Result<PostListPage, ApplicationError> {
        let filter = PostListFilter {
            page: query.page.max(1),
            limit: query.limit.clamp(1, MAX_PAGE_LIMIT),
            sort: query.sort,
            category_id: query.category_id,
            tag: query.tag,
        };

        Ok(self.post_repo.list(&filter).await?)
    }
}

// ============================================================================
// GetPost
// ============================================================================

/// GetPost Handler
pub struct GetPostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl GetPostHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, query: GetPost) -> Result<PostDetailRecord, ApplicationError> {
        let post = self
            .post_repo
            .find_detail(query.post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("POST_NOT_FOUND", "帖子不存在"))?;

        // 每次访问详情浏览量 +1，返回的计数为自增前的值
        self.post_repo.increment_view_count(query.post_id).await?;

        Ok(post)
    }
}

// ============================================================================
// GetPostComments
// ============================================================================

/// 评论树节点
#[derive(Debug, Clone)]
pub struct CommentNode {
    pub comment: CommentRecord,
    pub replies: Vec<CommentNode>,
}

/// 评论结果页（对顶层评论分页，回复子树完整返回）
#[derive(Debug, Clone)]
pub struct CommentPage {
    pub comments: Vec<CommentNode>,
}

/// GetPostComments Handler
pub struct GetPostCommentsHandler {
    comment_repo: Arc<dyn CommentRepositoryPort>,
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl GetPostCommentsHandler {
    pub fn new(
        comment_repo: Arc<dyn CommentRepositoryPort>,
        post_repo: Arc<dyn PostRepositoryPort>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }

    pub async fn handle(&self, query: GetPostComments) -> Result<CommentPage, ApplicationError> {
        if self
            .post_repo
            .find_detail(query.post_id)
            .await?
            .is_none()
        {
            return Err(ApplicationError::not_found("POST_NOT_FOUND", "帖子不存在"));
        }

        let comments = self.comment_repo.find_by_post(query.post_id).await?;
        let tree = build_comment_tree(comments);

        // 顶层评论分页
        let page = query.page.max(1) as usize;
        let per_page = COMMENTS_PER_PAGE as usize;
        let start = (page - 1) * per_page;
        let comments = tree.into_iter().skip(start).take(per_page).collect();

        Ok(CommentPage { comments })
    }
}

/// 由扁平评论列表组装评论树
///
/// 输入按创建时间升序，输出保持同一层级的时间顺序。
/// 父评论缺失的记录（理论上不会出现）按顶层处理。
pub fn build_comment_tree(comments: Vec<CommentRecord>) -> Vec<CommentNode> {
    let known_ids: std::collections::HashSet<i64> = comments.iter().map(|c| c.id).collect();

    let mut children: HashMap<Option<i64>, Vec<CommentRecord>> = HashMap::new();
    for comment in comments {
        let parent = match comment.parent_id {
            Some(pid) if known_ids.contains(&pid) => Some(pid),
            _ => None,
        };
        children.entry(parent).or_default().push(comment);
    }

    fn assemble(
        parent: Option<i64>,
        children: &mut HashMap<Option<i64>, Vec<CommentRecord>>,
    ) -> Vec<CommentNode> {
        let Some(records) = children.remove(&parent) else {
            return Vec::new();
        };
        records
            .into_iter()
            .map(|record| {
                let replies = assemble(Some(record.id), children);
                CommentNode {
                    comment: record,
                    replies,
                }
            })
            .collect()
    }

    assemble(None, &mut children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn comment(id: i64, parent_id: Option<i64>) -> CommentRecord {
        CommentRecord {
            id,
            post_id: 1,
            parent_id,
            author_id: 1,
            author_username: "alice".to_string(),
            author_avatar: None,
            content: format!("comment {}", id),
            like_count: 0,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, id as u32).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, id as u32).unwrap(),
        }
    }

    #[test]
    fn test_flat_list_stays_flat() {
        let tree = build_comment_tree(vec![comment(1, None), comment(2, None)]);
        assert_eq!(tree.len(), 2);
        assert!(tree[0].replies.is_empty());
    }

    #[test]
    fn test_nested_replies() {
        let tree = build_comment_tree(vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, Some(2)),
            comment(4, None),
        ]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].comment.id, 1);
        assert_eq!(tree[0].replies.len(), 1);
        assert_eq!(tree[0].replies[0].comment.id, 2);
        assert_eq!(tree[0].replies[0].replies[0].comment.id, 3);
        assert_eq!(tree[1].comment.id, 4);
    }

    #[test]
    fn test_sibling_order_preserved() {
        let tree = build_comment_tree(vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, Some(1)),
        ]);
        let ids: Vec<i64> = tree[0].replies.iter().map(|n| n.comment.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_orphan_treated_as_top_level() {
        let tree = build_comment_tree(vec![comment(1, None), comment(2, Some(99))]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_comment_tree(Vec::new()).is_empty());
    }
}
