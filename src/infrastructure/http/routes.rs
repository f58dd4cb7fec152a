//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                      GET     健康检查
//! - /api/auth/register             POST    注册并签发令牌
//! - /api/auth/login                POST    登录（用户名或邮箱）
//! - /api/auth/logout               POST    登出（需认证）
//! - /api/users/profile             GET/PUT 本人资料（需认证）
//! - /api/users/{id}                GET     公开资料
//! - /api/users/daily-tasks         GET     今日任务表（需认证）
//! - /api/users/daily-tasks/complete POST   完成任务（需认证）
//! - /api/posts                     GET     帖子列表（分页/筛选/排序）
//! - /api/posts                     POST    发帖（需认证）
//! - /api/posts/{id}                GET     帖子详情（浏览数 +1）
//! - /api/posts/{id}                PUT     编辑帖子（仅作者）
//! - /api/posts/{id}                DELETE  删除帖子（仅作者）
//! - /api/posts/{id}/like           POST    点赞（需认证）
//! - /api/posts/{id}/comments       GET     评论树（顶层分页）
//! - /api/posts/{id}/comments       POST    发表评论（需认证）
//! - /api/comments/{id}/reply       POST    回复评论（需认证）
//! - /api/categories                GET     分类列表
//! - /api/tags                      GET     热门标签

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/auth", auth_routes())
        .nest("/users", user_routes())
        .nest("/posts", post_routes())
        .route("/comments/:comment_id/reply", post(handlers::reply_comment))
        .route("/categories", get(handlers::list_categories))
        .route("/tags", get(handlers::list_tags))
}

/// Auth 路由
fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
}

/// User 路由（静态段 daily-tasks 优先于 {user_id} 匹配）
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/profile",
            get(handlers::get_my_profile).put(handlers::update_my_profile),
        )
        .route("/daily-tasks", get(handlers::get_daily_tasks))
        .route("/daily-tasks/complete", post(handlers::complete_task))
        .route("/:user_id", get(handlers::get_user))
}

/// Post 路由
fn post_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_posts).post(handlers::create_post))
        .route(
            "/:post_id",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .route("/:post_id/like", post(handlers::like_post))
        .route(
            "/:post_id/comments",
            get(handlers::get_post_comments).post(handlers::create_comment),
        )
}
