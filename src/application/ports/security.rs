//! Security Ports - 认证相关端口
//!
//! 密码哈希与令牌签发的抽象接口
//! 具体实现在 infrastructure 层（bcrypt / JWT）

use thiserror::Error;

/// 认证错误
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Token error: {0}")]
    TokenError(String),
}

/// 密码哈希端口
pub trait PasswordHasherPort: Send + Sync {
    /// 哈希明文密码
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// 校验明文密码与哈希是否匹配
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError>;
}

/// 令牌签发端口
pub trait TokenIssuerPort: Send + Sync {
    /// 为用户签发令牌
    fn issue(&self, user_id: i64) -> Result<String, AuthError>;

    /// 校验令牌，返回用户 ID
    fn verify(&self, token: &str) -> Result<i64, AuthError>;
}
