//! Post Commands - 帖子写操作

/// 创建帖子命令
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub category_id: i64,
    pub tags: Vec<String>,
}

/// 更新帖子命令，None 表示不修改；tags 为 Some 时整体替换
#[derive(Debug, Clone)]
pub struct UpdatePost {
    pub post_id: i64,
    pub editor_id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<i64>,
    pub tags: Option<Vec<String>>,
}

/// 删除帖子命令
#[derive(Debug, Clone)]
pub struct DeletePost {
    pub post_id: i64,
    pub editor_id: i64,
}

/// 点赞帖子命令
#[derive(Debug, Clone)]
pub struct LikePost {
    pub post_id: i64,
    pub user_id: i64,
}
