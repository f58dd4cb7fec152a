//! User Query Handlers - 资料与每日任务查询

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{DailyTaskRepositoryPort, TaskSheetRecord, UserRepositoryPort};
use crate::application::queries::{GetDailyTasks, GetUserProfile, UserProfileView};
use crate::domain::today_key;

// ============================================================================
// GetUserProfile
// ============================================================================

/// GetUserProfile Handler
pub struct GetUserProfileHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserProfileHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUserProfile) -> Result<UserProfileView, ApplicationError> {
        let user = self
            .user_repo
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("USER_NOT_FOUND", "用户不存在"))?;

        let stats = self.user_repo.stats(user.id).await?;

        Ok(UserProfileView::from_record(user, stats, query.include_email))
    }
}

// ============================================================================
// GetDailyTasks
// ============================================================================

/// 今日任务视图：任务表 + 用户累计经验
#[derive(Debug, Clone)]
pub struct DailyTasksView {
    pub sheet: TaskSheetRecord,
    pub exp: i64,
}

/// GetDailyTasks Handler
pub struct GetDailyTasksHandler {
    task_repo: Arc<dyn DailyTaskRepositoryPort>,
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetDailyTasksHandler {
    pub fn new(
        task_repo: Arc<dyn DailyTaskRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
    ) -> Self {
        Self {
            task_repo,
            user_repo,
        }
    }

    pub async fn handle(&self, query: GetDailyTasks) -> Result<DailyTasksView, ApplicationError> {
        let user = self
            .user_repo
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("USER_NOT_FOUND", "用户不存在"))?;

        // 当天首次查询时惰性创建任务表
        let sheet = self
            .task_repo
            .sheet_for_day(query.user_id, &today_key())
            .await?;

        Ok(DailyTasksView {
            sheet,
            exp: user.exp,
        })
    }
}
