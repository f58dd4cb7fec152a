//! Domain Layer - 领域层
//!
//! 纯业务规则，不依赖基础设施：
//! - user: 用户字段校验规则
//! - post: 帖子字段校验与摘要生成
//! - daily_task: 每日任务类型与经验值规则

pub mod daily_task;
pub mod post;
pub mod user;

pub use daily_task::{task_date_key, today_key, TaskKind, TASK_EXP_REWARD};
pub use post::{generate_excerpt, CommentContent, PostContent, PostTitle, TagName};
pub use user::{AvatarUrl, Bio, Email, Password, Username};
