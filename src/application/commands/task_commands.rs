//! Daily Task Commands - 每日任务

/// 完成每日任务命令
///
/// `task_type` 为客户端原始输入，处理器中解析为 TaskKind
#[derive(Debug, Clone)]
pub struct CompleteDailyTask {
    pub user_id: i64,
    pub task_type: String,
}
