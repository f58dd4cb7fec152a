//! DailyTask Context - 每日任务类型与经验值规则
//!
//! 四种任务（发帖/点赞/评论/签到），每种任务每人每天最多奖励一次

use chrono::{DateTime, Utc};

/// 每个任务完成一次奖励的经验值
pub const TASK_EXP_REWARD: i64 = 30;

/// 每日任务类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// 发帖
    Post,
    /// 点赞
    Like,
    /// 评论
    Comment,
    /// 签到
    Checkin,
}

impl TaskKind {
    /// 所有任务类型
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Post,
        TaskKind::Like,
        TaskKind::Comment,
        TaskKind::Checkin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Post => "post",
            TaskKind::Like => "like",
            TaskKind::Comment => "comment",
            TaskKind::Checkin => "checkin",
        }
    }

    /// 解析任务类型（忽略大小写）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "post" => Some(TaskKind::Post),
            "like" => Some(TaskKind::Like),
            "comment" => Some(TaskKind::Comment),
            "checkin" => Some(TaskKind::Checkin),
            _ => None,
        }
    }

    /// 任务对应的 daily_tasks 表完成标记列名
    pub fn column(&self) -> &'static str {
        match self {
            TaskKind::Post => "post_completed",
            TaskKind::Like => "like_completed",
            TaskKind::Comment => "comment_completed",
            TaskKind::Checkin => "checkin_completed",
        }
    }

    /// 完成奖励的经验值
    pub fn exp_reward(&self) -> i64 {
        TASK_EXP_REWARD
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 任务日期键：UTC 日历日，格式 `YYYY-MM-DD`
pub fn task_date_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// 今天的任务日期键
pub fn today_key() -> String {
    task_date_key(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_task_kind() {
        assert_eq!(TaskKind::parse("post"), Some(TaskKind::Post));
        assert_eq!(TaskKind::parse("  CheckIn "), Some(TaskKind::Checkin));
        assert_eq!(TaskKind::parse("unknown"), None);
        assert_eq!(TaskKind::parse(""), None);
    }

    #[test]
    fn test_round_trip() {
        for kind in TaskKind::ALL {
            assert_eq!(TaskKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_exp_reward() {
        for kind in TaskKind::ALL {
            assert_eq!(kind.exp_reward(), 30);
        }
    }

    #[test]
    fn test_task_date_key() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 23, 59, 59).unwrap();
        assert_eq!(task_date_key(at), "2026-03-07");
    }
}
