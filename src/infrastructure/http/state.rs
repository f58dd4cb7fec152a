//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CompleteDailyTaskHandler, CreateCommentHandler, CreatePostHandler, DeletePostHandler,
    LikePostHandler, LoginUserHandler, RegisterUserHandler, ReplyCommentHandler,
    UpdatePostHandler, UpdateProfileHandler,
    // Query handlers
    GetDailyTasksHandler, GetPostCommentsHandler, GetPostHandler, GetUserProfileHandler,
    ListCategoriesHandler, ListPopularTagsHandler, ListPostsHandler,
    // Ports
    CategoryRepositoryPort, CommentRepositoryPort, DailyTaskRepositoryPort, PasswordHasherPort,
    PostRepositoryPort, TagRepositoryPort, TokenIssuerPort, UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub user_repo: Arc<dyn UserRepositoryPort>,
    pub post_repo: Arc<dyn PostRepositoryPort>,
    pub comment_repo: Arc<dyn CommentRepositoryPort>,
    pub category_repo: Arc<dyn CategoryRepositoryPort>,
    pub tag_repo: Arc<dyn TagRepositoryPort>,
    pub task_repo: Arc<dyn DailyTaskRepositoryPort>,
    pub password_hasher: Arc<dyn PasswordHasherPort>,
    pub token_issuer: Arc<dyn TokenIssuerPort>,

    // ========== Command Handlers ==========
    pub register_handler: RegisterUserHandler,
    pub login_handler: LoginUserHandler,
    pub update_profile_handler: UpdateProfileHandler,
    pub create_post_handler: CreatePostHandler,
    pub update_post_handler: UpdatePostHandler,
    pub delete_post_handler: DeletePostHandler,
    pub like_post_handler: LikePostHandler,
    pub create_comment_handler: CreateCommentHandler,
    pub reply_comment_handler: ReplyCommentHandler,
    pub complete_task_handler: CompleteDailyTaskHandler,

    // ========== Query Handlers ==========
    pub list_posts_handler: ListPostsHandler,
    pub get_post_handler: GetPostHandler,
    pub get_post_comments_handler: GetPostCommentsHandler,
    pub get_user_profile_handler: GetUserProfileHandler,
    pub get_daily_tasks_handler: GetDailyTasksHandler,
    pub list_categories_handler: ListCategoriesHandler,
    pub list_popular_tags_handler: ListPopularTagsHandler,
}

impl AppState {
    /// 创建应用状态
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        post_repo: Arc<dyn PostRepositoryPort>,
        comment_repo: Arc<dyn CommentRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
        tag_repo: Arc<dyn TagRepositoryPort>,
        task_repo: Arc<dyn DailyTaskRepositoryPort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
        token_issuer: Arc<dyn TokenIssuerPort>,
    ) -> Self {
        Self {
            // Command handlers
            register_handler: RegisterUserHandler::new(
                user_repo.clone(),
                password_hasher.clone(),
                token_issuer.clone(),
            ),
            login_handler: LoginUserHandler::new(
                user_repo.clone(),
                password_hasher.clone(),
                token_issuer.clone(),
            ),
            update_profile_handler: UpdateProfileHandler::new(user_repo.clone()),
            create_post_handler: CreatePostHandler::new(
                post_repo.clone(),
                category_repo.clone(),
            ),
            update_post_handler: UpdatePostHandler::new(
                post_repo.clone(),
                category_repo.clone(),
            ),
            delete_post_handler: DeletePostHandler::new(post_repo.clone()),
            like_post_handler: LikePostHandler::new(post_repo.clone()),
            create_comment_handler: CreateCommentHandler::new(
                comment_repo.clone(),
                post_repo.clone(),
            ),
            reply_comment_handler: ReplyCommentHandler::new(comment_repo.clone()),
            complete_task_handler: CompleteDailyTaskHandler::new(task_repo.clone()),

            // Query handlers
            list_posts_handler: ListPostsHandler::new(post_repo.clone()),
            get_post_handler: GetPostHandler::new(post_repo.clone()),
            get_post_comments_handler: GetPostCommentsHandler::new(
                comment_repo.clone(),
                post_repo.clone(),
            ),
            get_user_profile_handler: GetUserProfileHandler::new(user_repo.clone()),
            get_daily_tasks_handler: GetDailyTasksHandler::new(
                task_repo.clone(),
                user_repo.clone(),
            ),
            list_categories_handler: ListCategoriesHandler::new(category_repo.clone()),
            list_popular_tags_handler: ListPopularTagsHandler::new(tag_repo.clone()),

            // Ports
            user_repo,
            post_repo,
            comment_repo,
            category_repo,
            tag_repo,
            task_repo,
            password_hasher,
            token_issuer,
        }
    }
}
