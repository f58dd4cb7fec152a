//! Daily Task Command Handlers - 每日任务完成

use std::sync::Arc;

use crate::application::commands::CompleteDailyTask;
use crate::application::error::ApplicationError;
use crate::application::ports::{DailyTaskRepositoryPort, TaskCompletion};
use crate::domain::{today_key, TaskKind};

/// CompleteDailyTask Handler
///
/// 幂等性由仓储层的写事务保证：同一 (用户, 日期, 任务) 最多奖励一次
pub struct CompleteDailyTaskHandler {
    task_repo: Arc<dyn DailyTaskRepositoryPort>,
}

impl CompleteDailyTaskHandler {
    pub fn new(task_repo: Arc<dyn DailyTaskRepositoryPort>) -> Self {
        Self { task_repo }
    }

    pub async fn handle(
        &self,
        command: CompleteDailyTask,
    ) -> Result<TaskCompletion, ApplicationError> {
        let kind = TaskKind::parse(&command.task_type)
            .ok_or_else(|| ApplicationError::bad_request("INVALID_TASK", "无效的任务类型"))?;

        let task_date = today_key();
        let completion = self
            .task_repo
            .complete(command.user_id, &task_date, kind)
            .await?;

        if completion.already_completed {
            tracing::debug!(
                user_id = command.user_id,
                task = %kind,
                %task_date,
                "Daily task already completed"
            );
        } else {
            tracing::info!(
                user_id = command.user_id,
                task = %kind,
                exp_added = completion.exp_added,
                current_exp = completion.current_exp,
                "Daily task completed"
            );
        }

        Ok(completion)
    }
}
