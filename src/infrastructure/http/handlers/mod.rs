//! HTTP Handlers

mod auth;
mod comments;
mod ping;
mod posts;
mod tasks;
mod taxonomy;
mod users;

pub use auth::{login, logout, register};
pub use comments::reply_comment;
pub use ping::ping;
pub use posts::{
    create_comment, create_post, delete_post, get_post, get_post_comments, like_post, list_posts,
    update_post,
};
pub use tasks::{complete_task, get_daily_tasks};
pub use taxonomy::{list_categories, list_tags};
pub use users::{get_my_profile, get_user, update_my_profile};
