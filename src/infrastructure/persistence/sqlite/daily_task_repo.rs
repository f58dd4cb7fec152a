//! SQLite Daily Task Repository
//!
//! 完成任务的读-改-写在单个写事务内执行。SQLite 同一时刻只允许一个
//! 写事务，因此同一 (用户, 日期, 任务) 的并发完成请求最多奖励一次

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, Sqlite, Transaction};

use super::DbPool;
use crate::application::ports::{
    DailyTaskRepositoryPort, RepositoryError, TaskCompletion, TaskSheetRecord,
};
use crate::domain::TaskKind;

/// SQLite Daily Task Repository
pub struct SqliteDailyTaskRepository {
    pool: DbPool,
}

impl SqliteDailyTaskRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TaskRow {
    task_date: String,
    post_completed: bool,
    like_completed: bool,
    comment_completed: bool,
    checkin_completed: bool,
    exp_earned: i64,
}

impl From<TaskRow> for TaskSheetRecord {
    fn from(row: TaskRow) -> Self {
        TaskSheetRecord {
            task_date: row.task_date,
            post_completed: row.post_completed,
            like_completed: row.like_completed,
            comment_completed: row.comment_completed,
            checkin_completed: row.checkin_completed,
            exp_earned: row.exp_earned,
        }
    }
}

const SHEET_COLUMNS: &str =
    "task_date, post_completed, like_completed, comment_completed, checkin_completed, exp_earned";

/// 确保当天的任务行存在并返回它（事务内）
async fn ensure_sheet(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: i64,
    task_date: &str,
) -> Result<TaskSheetRecord, RepositoryError> {
    let now = Utc::now().to_rfc3339();
    sqlx::query(
        r#"
        INSERT INTO daily_tasks (user_id, task_date, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (user_id, task_date) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(task_date)
    .bind(&now)
    .bind(&now)
    .execute(&mut **tx)
    .await?;

    let sql = format!(
        "SELECT {SHEET_COLUMNS} FROM daily_tasks WHERE user_id = ? AND task_date = ?"
    );
    let row: TaskRow = sqlx::query_as(&sql)
        .bind(user_id)
        .bind(task_date)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.into())
}

#[async_trait]
impl DailyTaskRepositoryPort for SqliteDailyTaskRepository {
    async fn sheet_for_day(
        &self,
        user_id: i64,
        task_date: &str,
    ) -> Result<TaskSheetRecord, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let sheet = ensure_sheet(&mut tx, user_id, task_date).await?;
        tx.commit().await?;
        Ok(sheet)
    }

    async fn complete(
        &self,
        user_id: i64,
        task_date: &str,
        kind: TaskKind,
    ) -> Result<TaskCompletion, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let sheet = ensure_sheet(&mut tx, user_id, task_date).await?;

        if sheet.is_completed(kind) {
            let (current_exp,): (i64,) = sqlx::query_as("SELECT exp FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;
            tx.commit().await?;
            return Ok(TaskCompletion {
                already_completed: true,
                exp_added: 0,
                sheet,
                current_exp,
            });
        }

        let reward = kind.exp_reward();
        let now = Utc::now().to_rfc3339();
        // kind.column() 是固定列名枚举，非用户输入
        let sql = format!(
            "UPDATE daily_tasks SET {} = 1, exp_earned = exp_earned + ?, updated_at = ? \
             WHERE user_id = ? AND task_date = ?",
            kind.column()
        );
        sqlx::query(&sql)
            .bind(reward)
            .bind(&now)
            .bind(user_id)
            .bind(task_date)
            .execute(&mut *tx)
            .await?;

        let (current_exp,): (i64,) = sqlx::query_as(
            "UPDATE users SET exp = exp + ?, updated_at = ? WHERE id = ? RETURNING exp",
        )
        .bind(reward)
        .bind(&now)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        let sheet = ensure_sheet(&mut tx, user_id, task_date).await?;
        tx.commit().await?;

        Ok(TaskCompletion {
            already_completed: false,
            exp_added: reward,
            sheet,
            current_exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NewUser, UserRepositoryPort};
    use crate::domain::TASK_EXP_REWARD;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteUserRepository,
    };

    async fn seeded_repo() -> (SqliteDailyTaskRepository, i64) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let users = SqliteUserRepository::new(pool.clone());
        let user = users
            .create(NewUser {
                username: "tasker".to_string(),
                email: "tasker@example.com".to_string(),
                password_hash: "$2b$04$hash".to_string(),
            })
            .await
            .unwrap();

        (SqliteDailyTaskRepository::new(pool), user.id)
    }

    #[tokio::test]
    async fn test_sheet_lazily_created_empty() {
        let (repo, user_id) = seeded_repo().await;
        let sheet = repo.sheet_for_day(user_id, "2026-08-29").await.unwrap();
        assert_eq!(sheet.task_date, "2026-08-29");
        assert!(!sheet.post_completed);
        assert!(!sheet.checkin_completed);
        assert_eq!(sheet.exp_earned, 0);
    }

    #[tokio::test]
    async fn test_complete_awards_exp_once() {
        let (repo, user_id) = seeded_repo().await;

        let first = repo
            .complete(user_id, "2026-08-29", TaskKind::Checkin)
            .await
            .unwrap();
        assert!(!first.already_completed);
        assert_eq!(first.exp_added, TASK_EXP_REWARD);
        assert_eq!(first.current_exp, TASK_EXP_REWARD);
        assert!(first.sheet.checkin_completed);

        let second = repo
            .complete(user_id, "2026-08-29", TaskKind::Checkin)
            .await
            .unwrap();
        assert!(second.already_completed);
        assert_eq!(second.exp_added, 0);
        assert_eq!(second.current_exp, TASK_EXP_REWARD);
        assert_eq!(second.sheet.exp_earned, TASK_EXP_REWARD);
    }

    #[tokio::test]
    async fn test_tasks_accumulate_within_day() {
        let (repo, user_id) = seeded_repo().await;
        repo.complete(user_id, "2026-08-29", TaskKind::Post)
            .await
            .unwrap();
        let result = repo
            .complete(user_id, "2026-08-29", TaskKind::Comment)
            .await
            .unwrap();

        assert_eq!(result.current_exp, TASK_EXP_REWARD * 2);
        assert_eq!(result.sheet.exp_earned, TASK_EXP_REWARD * 2);
        assert!(result.sheet.post_completed);
        assert!(result.sheet.comment_completed);
        assert!(!result.sheet.like_completed);
    }

    #[tokio::test]
    async fn test_concurrent_completions_award_once() {
        // 文件库 + 多连接池，两次 complete 走不同连接真正并发
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("tasks.db"));
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let users = SqliteUserRepository::new(pool.clone());
        let user = users
            .create(NewUser {
                username: "racer".to_string(),
                email: "racer@example.com".to_string(),
                password_hash: "$2b$04$hash".to_string(),
            })
            .await
            .unwrap();

        let repo_a = SqliteDailyTaskRepository::new(pool.clone());
        let repo_b = SqliteDailyTaskRepository::new(pool.clone());
        let (a, b) = tokio::join!(
            repo_a.complete(user.id, "2026-08-29", TaskKind::Checkin),
            repo_b.complete(user.id, "2026-08-29", TaskKind::Checkin),
        );
        let a = a.unwrap();
        let b = b.unwrap();

        // 恰好一次加经验，另一次报告已完成
        assert_eq!(a.exp_added + b.exp_added, TASK_EXP_REWARD);
        assert_ne!(a.already_completed, b.already_completed);

        let (exp,): (i64,) = sqlx::query_as("SELECT exp FROM users WHERE id = ?")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(exp, TASK_EXP_REWARD);
    }

    #[tokio::test]
    async fn test_new_day_resets_sheet() {
        let (repo, user_id) = seeded_repo().await;
        repo.complete(user_id, "2026-08-29", TaskKind::Like)
            .await
            .unwrap();

        let next_day = repo.sheet_for_day(user_id, "2026-08-30").await.unwrap();
        assert!(!next_day.like_completed);
        assert_eq!(next_day.exp_earned, 0);

        let result = repo
            .complete(user_id, "2026-08-30", TaskKind::Like)
            .await
            .unwrap();
        assert!(!result.already_completed);
        assert_eq!(result.current_exp, TASK_EXP_REWARD * 2);
    }
}
