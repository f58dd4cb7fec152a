//! Comment Commands - 评论写操作

/// 发表评论命令（parent_id 为 Some 时作为楼中楼回复）
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub post_id: i64,
    pub author_id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
}

/// 回复评论命令（帖子 ID 继承自父评论）
#[derive(Debug, Clone)]
pub struct ReplyComment {
    pub parent_comment_id: i64,
    pub author_id: i64,
    pub content: String,
}
