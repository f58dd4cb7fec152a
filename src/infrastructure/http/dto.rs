//! HTTP DTOs - 响应数据传输对象
//!
//! 对外 JSON 统一使用 camelCase 字段名，时间戳为 RFC3339 字符串

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::{
    AuthResponse, CategoryRecord, CommentNode, DailyTasksView, PostDetailRecord, PostListPage,
    PostListRecord, TagRecord, TaskCompletion, TaskSheetRecord, UserProfileView,
};

// ============================================================================
// User
// ============================================================================

/// 用户资料
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: i64,
    pub username: String,
    /// 仅本人可见
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub exp: i64,
    pub join_date: DateTime<Utc>,
    pub post_count: i64,
    pub comment_count: i64,
}

impl From<UserProfileView> for UserProfileDto {
    fn from(view: UserProfileView) -> Self {
        Self {
            id: view.id,
            username: view.username,
            email: view.email,
            avatar: view.avatar,
            bio: view.bio,
            exp: view.exp,
            join_date: view.join_date,
            post_count: view.post_count,
            comment_count: view.comment_count,
        }
    }
}

/// 注册/登录响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub user: UserProfileDto,
    pub token: String,
}

impl From<AuthResponse> for AuthResponseDto {
    fn from(resp: AuthResponse) -> Self {
        Self {
            user: resp.user.into(),
            token: resp.token,
        }
    }
}

/// 帖子/评论中内嵌的作者信息
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i64,
    pub username: String,
    pub avatar: Option<String>,
}

// ============================================================================
// Category / Tag
// ============================================================================

/// 分类
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub post_count: i64,
}

impl From<CategoryRecord> for CategoryDto {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            color: record.color,
            post_count: record.post_count,
        }
    }
}

/// 标签
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub post_count: i64,
}

impl From<TagRecord> for TagDto {
    fn from(record: TagRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            post_count: record.post_count,
        }
    }
}

/// 帖子中内嵌的分类信息
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRefDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// 帖子中内嵌的标签信息
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRefDto {
    pub id: i64,
    pub name: String,
}

// ============================================================================
// Post
// ============================================================================

/// 帖子列表项（正文以摘要代替）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListItemDto {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub author: AuthorDto,
    pub category: CategoryRefDto,
    pub tags: Vec<TagRefDto>,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostListRecord> for PostListItemDto {
    fn from(record: PostListRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            excerpt: record.excerpt,
            author: AuthorDto {
                id: record.author_id,
                username: record.author_username,
                avatar: record.author_avatar,
            },
            category: CategoryRefDto {
                id: record.category_id,
                name: record.category_name,
                description: record.category_description,
                color: record.category_color,
            },
            tags: record
                .tags
                .into_iter()
                .map(|t| TagRefDto {
                    id: t.id,
                    name: t.name,
                })
                .collect(),
            view_count: record.view_count,
            like_count: record.like_count,
            comment_count: record.comment_count,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// 帖子详情（含完整正文）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailDto {
    #[serde(flatten)]
    pub summary: PostListItemDto,
    pub content: String,
}

impl From<PostDetailRecord> for PostDetailDto {
    fn from(record: PostDetailRecord) -> Self {
        Self {
            summary: record.summary.into(),
            content: record.content,
        }
    }
}

/// 分页信息
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationDto {
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            (total + limit as i64 - 1) / limit as i64
        };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// 帖子列表响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponseDto {
    pub data: Vec<PostListItemDto>,
    pub pagination: PaginationDto,
}

impl PostListResponseDto {
    pub fn new(page_result: PostListPage, page: u32, limit: u32) -> Self {
        let pagination = PaginationDto::new(page, limit, page_result.total);
        Self {
            data: page_result.posts.into_iter().map(Into::into).collect(),
            pagination,
        }
    }
}

/// 点赞响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponseDto {
    pub post_id: i64,
    pub like_count: i64,
}

// ============================================================================
// Comment
// ============================================================================

/// 评论（回复以树形嵌套）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub parent_id: Option<i64>,
    pub author: AuthorDto,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub replies: Vec<CommentDto>,
}

impl From<CommentNode> for CommentDto {
    fn from(node: CommentNode) -> Self {
        let comment = node.comment;
        Self {
            id: comment.id,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            author: AuthorDto {
                id: comment.author_id,
                username: comment.author_username,
                avatar: comment.author_avatar,
            },
            content: comment.content,
            like_count: comment.like_count,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            replies: node.replies.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Daily Task
// ============================================================================

/// 当日任务表（日期与四个完成标志）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFlagsDto {
    pub date: String,
    pub post: bool,
    pub like: bool,
    pub comment: bool,
    pub checkin: bool,
}

impl From<&TaskSheetRecord> for TaskFlagsDto {
    fn from(sheet: &TaskSheetRecord) -> Self {
        Self {
            date: sheet.task_date.clone(),
            post: sheet.post_completed,
            like: sheet.like_completed,
            comment: sheet.comment_completed,
            checkin: sheet.checkin_completed,
        }
    }
}

/// 今日任务表响应，`exp` 为用户累计经验
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTasksDto {
    pub tasks: TaskFlagsDto,
    pub exp_earned_today: i64,
    pub exp: i64,
}

impl From<DailyTasksView> for DailyTasksDto {
    fn from(view: DailyTasksView) -> Self {
        Self {
            tasks: TaskFlagsDto::from(&view.sheet),
            exp_earned_today: view.sheet.exp_earned,
            exp: view.exp,
        }
    }
}

/// 任务完成响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompletionDto {
    pub already_completed: bool,
    pub exp_added: i64,
    pub exp_earned_today: i64,
    pub exp: i64,
    pub tasks: TaskFlagsDto,
}

impl From<TaskCompletion> for TaskCompletionDto {
    fn from(completion: TaskCompletion) -> Self {
        Self {
            already_completed: completion.already_completed,
            exp_added: completion.exp_added,
            exp_earned_today: completion.sheet.exp_earned,
            exp: completion.current_exp,
            tasks: TaskFlagsDto::from(&completion.sheet),
        }
    }
}

// ============================================================================
// Misc
// ============================================================================

/// 纯提示消息响应（登出、删除等）
#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_rounds_up() {
        let p = PaginationDto::new(1, 20, 41);
        assert_eq!(p.total_pages, 3);

        let p = PaginationDto::new(2, 20, 40);
        assert_eq!(p.total_pages, 2);

        let p = PaginationDto::new(1, 20, 0);
        assert_eq!(p.total_pages, 0);
    }

    #[test]
    fn test_email_omitted_when_none() {
        let dto = UserProfileDto {
            id: 1,
            username: "alice".to_string(),
            email: None,
            avatar: None,
            bio: None,
            exp: 0,
            join_date: Utc::now(),
            post_count: 0,
            comment_count: 0,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("joinDate").is_some());
    }

    #[test]
    fn test_daily_tasks_response_shape() {
        let view = DailyTasksView {
            sheet: TaskSheetRecord {
                task_date: "2026-08-29".to_string(),
                post_completed: true,
                like_completed: false,
                comment_completed: false,
                checkin_completed: false,
                exp_earned: 30,
            },
            exp: 90,
        };
        let json = serde_json::to_value(DailyTasksDto::from(view)).unwrap();
        // 前端读取 tasks.date 和累计经验字段 exp
        assert_eq!(json["tasks"]["date"], "2026-08-29");
        assert_eq!(json["tasks"]["post"], true);
        assert_eq!(json["exp"], 90);
        assert_eq!(json["expEarnedToday"], 30);
        assert!(json.get("totalExp").is_none());
    }
}
