//! Reforum - 论坛讨论区后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User: 用户名/邮箱/密码/资料校验规则
//! - Post: 标题/内容/标签规则、摘要生成
//! - DailyTask: 每日任务类型与经验值规则
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Repositories, PasswordHasher, TokenIssuer）
//! - Commands: CQRS 命令处理器（注册/登录/发帖/评论/点赞/任务）
//! - Queries: CQRS 查询处理器（帖子列表/详情/评论树/资料/分类/标签）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Auth: bcrypt 密码哈希 + JWT 令牌
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
