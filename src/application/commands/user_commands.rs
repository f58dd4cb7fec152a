//! User Commands - 资料更新

/// 更新资料命令，None 表示不修改
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub user_id: i64,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}
