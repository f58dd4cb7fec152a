//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repositories、PasswordHasher、TokenIssuer）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Auth commands
    LoginUser,
    RegisterUser,
    // Comment commands
    CreateComment,
    ReplyComment,
    // Post commands
    CreatePost,
    DeletePost,
    LikePost,
    UpdatePost,
    // Task commands
    CompleteDailyTask,
    // User commands
    UpdateProfile,
    // Handlers
    handlers::{
        AuthResponse, CompleteDailyTaskHandler, CreateCommentHandler, CreatePostHandler,
        DeletePostHandler, LikePostHandler, LikePostResponse, LoginUserHandler,
        RegisterUserHandler, ReplyCommentHandler, UpdatePostHandler, UpdateProfileHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Security
    AuthError,
    PasswordHasherPort,
    TokenIssuerPort,
    // Repositories
    CategoryRecord,
    CategoryRepositoryPort,
    CommentRecord,
    CommentRepositoryPort,
    DailyTaskRepositoryPort,
    NewComment,
    NewPost,
    NewUser,
    PostDetailRecord,
    PostListFilter,
    PostListPage,
    PostListRecord,
    PostPatch,
    PostRepositoryPort,
    PostSort,
    ProfilePatch,
    RepositoryError,
    TagRecord,
    TagRepositoryPort,
    TaskCompletion,
    TaskSheetRecord,
    UserRecord,
    UserRepositoryPort,
    UserStats,
};

pub use queries::{
    // Post queries
    GetPost,
    GetPostComments,
    ListPosts,
    COMMENTS_PER_PAGE,
    MAX_PAGE_LIMIT,
    // Taxonomy queries
    ListCategories,
    ListPopularTags,
    // User queries
    GetDailyTasks,
    GetUserProfile,
    UserProfileView,
    // Handlers
    handlers::{
        CommentNode, CommentPage, DailyTasksView, GetDailyTasksHandler, GetPostCommentsHandler,
        GetPostHandler, GetUserProfileHandler, ListCategoriesHandler, ListPopularTagsHandler,
        ListPostsHandler,
    },
};
