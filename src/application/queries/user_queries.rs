//! User Queries - 用户资料与每日任务查询

use chrono::{DateTime, Utc};

use crate::application::ports::{UserRecord, UserStats};

/// 获取用户资料查询
///
/// `include_email` 区分本人完整资料与公开资料
#[derive(Debug, Clone)]
pub struct GetUserProfile {
    pub user_id: i64,
    pub include_email: bool,
}

/// 获取今日任务表查询
#[derive(Debug, Clone)]
pub struct GetDailyTasks {
    pub user_id: i64,
}

/// 用户资料读模型
#[derive(Debug, Clone)]
pub struct UserProfileView {
    pub id: i64,
    pub username: String,
    /// 公开资料中为 None
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub exp: i64,
    pub join_date: DateTime<Utc>,
    pub post_count: i64,
    pub comment_count: i64,
}

impl UserProfileView {
    /// 由用户记录与统计信息组装资料视图
    pub fn from_record(user: UserRecord, stats: UserStats, include_email: bool) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: include_email.then_some(user.email),
            avatar: user.avatar,
            bio: user.bio,
            exp: user.exp,
            join_date: user.join_date,
            post_count: stats.post_count,
            comment_count: stats.comment_count,
        }
    }
}
