//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod repositories;
mod security;

pub use repositories::{
    CategoryRecord, CategoryRepositoryPort, CommentRecord, CommentRepositoryPort,
    DailyTaskRepositoryPort, NewComment, NewPost, NewUser, PostDetailRecord, PostListFilter,
    PostListPage, PostListRecord, PostPatch, PostRepositoryPort, PostSort, ProfilePatch,
    RepositoryError, TagRecord, TagRepositoryPort, TaskCompletion, TaskSheetRecord, UserRecord,
    UserRepositoryPort, UserStats,
};
pub use security::{AuthError, PasswordHasherPort, TokenIssuerPort};
