//! Post Queries - 帖子与评论查询

use crate::application::ports::PostSort;

/// 每页帖子数上限
pub const MAX_PAGE_LIMIT: u32 = 100;

/// 评论列表每页顶层评论数
pub const COMMENTS_PER_PAGE: u32 = 20;

/// 帖子列表查询
#[derive(Debug, Clone)]
pub struct ListPosts {
    pub page: u32,
    pub limit: u32,
    pub sort: PostSort,
    pub category_id: Option<i64>,
    pub tag: Option<String>,
}

impl Default for ListPosts {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            sort: PostSort::Time,
            category_id: None,
            tag: None,
        }
    }
}

/// 帖子详情查询（附带浏览量 +1 的副作用，与原始行为一致）
#[derive(Debug, Clone)]
pub struct GetPost {
    pub post_id: i64,
}

/// 帖子评论树查询，对顶层评论分页
#[derive(Debug, Clone)]
pub struct GetPostComments {
    pub post_id: i64,
    pub page: u32,
}
