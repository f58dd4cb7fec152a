//! 基础设施层
//!
//! 应用层端口的具体实现（SQLite 持久化、密码散列、令牌签发）
//! 以及 HTTP 接入层

pub mod auth;
pub mod http;
pub mod persistence;
