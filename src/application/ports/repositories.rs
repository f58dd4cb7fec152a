//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::TaskKind;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub exp: i64,
    pub join_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 新用户
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// 用户统计（帖子数与评论数）
#[derive(Debug, Clone, Copy, Default)]
pub struct UserStats {
    pub post_count: i64,
    pub comment_count: i64,
}

/// 资料更新补丁，None 表示不修改
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 创建用户
    async fn create(&self, user: NewUser) -> Result<UserRecord, RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError>;

    /// 根据用户名查找用户
    async fn find_by_username(&self, username: &str)
        -> Result<Option<UserRecord>, RepositoryError>;

    /// 根据邮箱查找用户
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 根据用户名或邮箱查找用户（用于登录）
    async fn find_by_login(&self, login: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 更新用户资料，返回更新后的记录
    async fn update_profile(
        &self,
        id: i64,
        patch: ProfilePatch,
    ) -> Result<Option<UserRecord>, RepositoryError>;

    /// 获取用户统计信息
    async fn stats(&self, id: i64) -> Result<UserStats, RepositoryError>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// 帖子列表项（含作者/分类连接字段）
#[derive(Debug, Clone)]
pub struct PostListRecord {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub author_id: i64,
    pub author_username: String,
    pub author_avatar: Option<String>,
    pub category_id: i64,
    pub category_name: String,
    pub category_description: Option<String>,
    pub category_color: Option<String>,
    pub tags: Vec<TagRecord>,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 帖子详情（列表项 + 完整内容）
#[derive(Debug, Clone)]
pub struct PostDetailRecord {
    pub summary: PostListRecord,
    pub content: String,
}

/// 新帖子
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: i64,
    pub category_id: i64,
    pub tags: Vec<String>,
}

/// 帖子更新补丁，None 表示不修改；tags 为 Some 时整体替换
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category_id: Option<i64>,
    pub tags: Option<Vec<String>>,
}

/// 帖子排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSort {
    /// 按创建时间倒序
    #[default]
    Time,
    /// 按热度（view_count + like_count * 2）倒序
    Hot,
}

impl PostSort {
    pub fn parse(s: &str) -> Self {
        match s {
            "hot" => PostSort::Hot,
            _ => PostSort::Time,
        }
    }
}

/// 帖子列表筛选条件
#[derive(Debug, Clone, Default)]
pub struct PostListFilter {
    pub page: u32,
    pub limit: u32,
    pub sort: PostSort,
    pub category_id: Option<i64>,
    pub tag: Option<String>,
}

/// 帖子列表结果页
#[derive(Debug, Clone)]
pub struct PostListPage {
    pub posts: Vec<PostListRecord>,
    pub total: i64,
}

/// Post Repository Port
#[async_trait]
pub trait PostRepositoryPort: Send + Sync {
    /// 创建帖子（含标签 upsert，事务内完成），返回新帖子 ID
    async fn create(&self, post: NewPost) -> Result<i64, RepositoryError>;

    /// 更新帖子（tags 为 Some 时重建关联，事务内完成）
    async fn update(&self, id: i64, patch: PostPatch) -> Result<(), RepositoryError>;

    /// 删除帖子，返回是否存在
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 获取帖子详情（含作者/分类/标签）
    async fn find_detail(&self, id: i64) -> Result<Option<PostDetailRecord>, RepositoryError>;

    /// 分页获取帖子列表
    async fn list(&self, filter: &PostListFilter) -> Result<PostListPage, RepositoryError>;

    /// 增加浏览量
    async fn increment_view_count(&self, id: i64) -> Result<(), RepositoryError>;

    /// 增加点赞数，返回新的点赞数；帖子不存在时返回 None
    async fn increment_like_count(&self, id: i64) -> Result<Option<i64>, RepositoryError>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// 评论实体（含作者连接字段）
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub id: i64,
    pub post_id: i64,
    pub parent_id: Option<i64>,
    pub author_id: i64,
    pub author_username: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 新评论
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub parent_id: Option<i64>,
    pub author_id: i64,
    pub content: String,
}

/// Comment Repository Port
#[async_trait]
pub trait CommentRepositoryPort: Send + Sync {
    /// 创建评论，返回完整记录
    async fn create(&self, comment: NewComment) -> Result<CommentRecord, RepositoryError>;

    /// 根据 ID 查找评论
    async fn find_by_id(&self, id: i64) -> Result<Option<CommentRecord>, RepositoryError>;

    /// 获取帖子的全部评论，按创建时间升序（评论树在查询处理器中组装）
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<CommentRecord>, RepositoryError>;
}

// ============================================================================
// Category / Tag Repository
// ============================================================================

/// 分类实体
#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub post_count: i64,
}

/// Category Repository Port
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// 获取所有分类（含帖子计数）
    async fn find_all(&self) -> Result<Vec<CategoryRecord>, RepositoryError>;

    /// 根据 ID 查找分类
    async fn find_by_id(&self, id: i64) -> Result<Option<CategoryRecord>, RepositoryError>;
}

/// 标签实体
#[derive(Debug, Clone)]
pub struct TagRecord {
    pub id: i64,
    pub name: String,
    pub post_count: i64,
}

/// Tag Repository Port
#[async_trait]
pub trait TagRepositoryPort: Send + Sync {
    /// 获取热门标签，按帖子计数倒序、名称升序
    async fn find_popular(&self, limit: u32) -> Result<Vec<TagRecord>, RepositoryError>;
}

// ============================================================================
// Daily Task Repository
// ============================================================================

/// 每日任务表（每用户每天一行）
#[derive(Debug, Clone)]
pub struct TaskSheetRecord {
    pub task_date: String,
    pub post_completed: bool,
    pub like_completed: bool,
    pub comment_completed: bool,
    pub checkin_completed: bool,
    pub exp_earned: i64,
}

impl TaskSheetRecord {
    /// 指定任务是否已完成
    pub fn is_completed(&self, kind: TaskKind) -> bool {
        match kind {
            TaskKind::Post => self.post_completed,
            TaskKind::Like => self.like_completed,
            TaskKind::Comment => self.comment_completed,
            TaskKind::Checkin => self.checkin_completed,
        }
    }
}

/// 任务完成结果
#[derive(Debug, Clone)]
pub struct TaskCompletion {
    pub already_completed: bool,
    pub exp_added: i64,
    pub sheet: TaskSheetRecord,
    /// 用户当前累计经验
    pub current_exp: i64,
}

/// Daily Task Repository Port
#[async_trait]
pub trait DailyTaskRepositoryPort: Send + Sync {
    /// 获取（或惰性创建）指定日期的任务表
    async fn sheet_for_day(
        &self,
        user_id: i64,
        task_date: &str,
    ) -> Result<TaskSheetRecord, RepositoryError>;

    /// 完成一项任务
    ///
    /// 必须在单个写事务中执行读-改-写，保证同一 (用户, 日期, 任务)
    /// 并发请求下最多奖励一次
    async fn complete(
        &self,
        user_id: i64,
        task_date: &str,
        kind: TaskKind,
    ) -> Result<TaskCompletion, RepositoryError>;
}
