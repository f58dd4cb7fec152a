//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod auth_commands;
mod comment_commands;
mod post_commands;
mod task_commands;
mod user_commands;

pub mod handlers;

pub use auth_commands::*;
pub use comment_commands::*;
pub use post_commands::*;
pub use task_commands::*;
pub use user_commands::*;
