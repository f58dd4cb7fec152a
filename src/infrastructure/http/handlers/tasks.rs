//! Daily Task Handlers - 每日任务与经验

use axum::extract::State;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{CompleteDailyTask, GetDailyTasks};
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::dto::{DailyTasksDto, TaskCompletionDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::Json;
use crate::infrastructure::http::state::AppState;

/// 获取今日任务表
pub async fn get_daily_tasks(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> Result<Json<DailyTasksDto>, ApiError> {
    let view = state
        .get_daily_tasks_handler
        .handle(GetDailyTasks {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(view.into()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTaskRequest {
    /// post / like / comment / checkin
    pub task_type: String,
}

/// 完成一项任务。重复完成返回当前状态且不再加经验
pub async fn complete_task(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(req): Json<CompleteTaskRequest>,
) -> Result<Json<TaskCompletionDto>, ApiError> {
    let completion = state
        .complete_task_handler
        .handle(CompleteDailyTask {
            user_id: user.user_id,
            task_type: req.task_type,
        })
        .await?;

    Ok(Json(completion.into()))
}
