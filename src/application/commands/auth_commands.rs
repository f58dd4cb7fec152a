//! Auth Commands - 注册与登录

/// 注册用户命令
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// 登录命令
///
/// `login` 字段同时匹配用户名或邮箱
#[derive(Debug, Clone)]
pub struct LoginUser {
    pub login: String,
    pub password: String,
}
