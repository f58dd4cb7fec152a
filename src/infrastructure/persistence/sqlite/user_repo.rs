//! SQLite User Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;

use super::{parse_datetime, DbPool};
use crate::application::ports::{
    NewUser, ProfilePatch, RepositoryError, UserRecord, UserRepositoryPort, UserStats,
};

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    avatar: Option<String>,
    bio: Option<String>,
    exp: i64,
    join_date: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            avatar: row.avatar,
            bio: row.bio,
            exp: row.exp,
            join_date: parse_datetime(&row.join_date)?,
            created_at: parse_datetime(&row.created_at)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}

const USER_COLUMNS: &str =
    "id, username, email, password_hash, avatar, bio, exp, join_date, created_at, updated_at";

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<UserRecord, RepositoryError> {
        let now = Utc::now().to_rfc3339();

        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, join_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&now)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Duplicate(e.to_string())
            }
            _ => RepositoryError::DatabaseError(e.to_string()),
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ? OR email = ?"
        ))
        .bind(login)
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn update_profile(
        &self,
        id: i64,
        patch: ProfilePatch,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        // 没有任何字段需要修改时仅返回当前记录
        if patch.avatar.is_none() && patch.bio.is_none() {
            return self.find_by_id(id).await;
        }

        let mut sql = String::from("UPDATE users SET updated_at = ?");
        if patch.avatar.is_some() {
            sql.push_str(", avatar = ?");
        }
        if patch.bio.is_some() {
            sql.push_str(", bio = ?");
        }
        sql.push_str(&format!(" WHERE id = ? RETURNING {USER_COLUMNS}"));

        let mut query = sqlx::query_as::<_, UserRow>(&sql).bind(Utc::now().to_rfc3339());
        if let Some(avatar) = &patch.avatar {
            query = query.bind(avatar);
        }
        if let Some(bio) = &patch.bio {
            query = query.bind(bio);
        }

        let row: Option<UserRow> = query.bind(id).fetch_optional(&self.pool).await?;
        row.map(TryInto::try_into).transpose()
    }

    async fn stats(&self, id: i64) -> Result<UserStats, RepositoryError> {
        let row: (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM posts WHERE author_id = ?),
                (SELECT COUNT(*) FROM comments WHERE author_id = ?)
            "#,
        )
        .bind(id)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(UserStats {
            post_count: row.0,
            comment_count: row.1,
        })
    }
}
