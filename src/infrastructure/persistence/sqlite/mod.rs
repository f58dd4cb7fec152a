//! SQLite Persistence - SQLite 持久化实现

mod comment_repo;
mod daily_task_repo;
mod database;
mod post_repo;
mod taxonomy_repo;
mod user_repo;

pub use comment_repo::SqliteCommentRepository;
pub use daily_task_repo::SqliteDailyTaskRepository;
pub use database::{create_pool, run_migrations, DatabaseConfig, DbPool};
pub use post_repo::SqlitePostRepository;
pub use taxonomy_repo::{SqliteCategoryRepository, SqliteTagRepository};
pub use user_repo::SqliteUserRepository;

use chrono::{DateTime, Utc};

use crate::application::ports::RepositoryError;

/// 解析存储为 RFC 3339 文本的时间戳
pub(crate) fn parse_datetime(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound(err.to_string()),
            _ => RepositoryError::DatabaseError(err.to_string()),
        }
    }
}
