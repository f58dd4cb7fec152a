//! Command Handlers - 命令处理器

mod auth_handlers;
mod comment_handlers;
mod post_handlers;
mod task_handlers;
mod user_handlers;

pub use auth_handlers::{AuthResponse, LoginUserHandler, RegisterUserHandler};
pub use comment_handlers::{CreateCommentHandler, ReplyCommentHandler};
pub use post_handlers::{
    CreatePostHandler, DeletePostHandler, LikePostHandler, LikePostResponse, UpdatePostHandler,
};
pub use task_handlers::CompleteDailyTaskHandler;
pub use user_handlers::UpdateProfileHandler;
