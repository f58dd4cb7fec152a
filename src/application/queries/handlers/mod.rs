//! Query Handlers - 查询处理器

mod post_handlers;
mod taxonomy_handlers;
mod user_handlers;

pub use post_handlers::{
    CommentNode, CommentPage, GetPostCommentsHandler, GetPostHandler, ListPostsHandler,
};
pub use taxonomy_handlers::{ListCategoriesHandler, ListPopularTagsHandler};
pub use user_handlers::{DailyTasksView, GetDailyTasksHandler, GetUserProfileHandler};
