//! SQLite Comment Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, Row};

use super::{parse_datetime, DbPool};
use crate::application::ports::{
    CommentRecord, CommentRepositoryPort, NewComment, RepositoryError,
};

/// SQLite Comment Repository
pub struct SqliteCommentRepository {
    pool: DbPool,
}

impl SqliteCommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    parent_id: Option<i64>,
    author_id: i64,
    author_username: String,
    author_avatar: Option<String>,
    content: String,
    like_count: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<CommentRow> for CommentRecord {
    type Error = RepositoryError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(CommentRecord {
            id: row.id,
            post_id: row.post_id,
            parent_id: row.parent_id,
            author_id: row.author_id,
            author_username: row.author_username,
            author_avatar: row.author_avatar,
            content: row.content,
            like_count: row.like_count,
            created_at: parse_datetime(&row.created_at)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}

const COMMENT_SELECT: &str = r#"
    SELECT cm.id, cm.post_id, cm.parent_id,
           u.id AS author_id, u.username AS author_username, u.avatar AS author_avatar,
           cm.content, cm.like_count, cm.created_at, cm.updated_at
    FROM comments cm
    JOIN users u ON cm.author_id = u.id
"#;

#[async_trait]
impl CommentRepositoryPort for SqliteCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<CommentRecord, RepositoryError> {
        let now = Utc::now().to_rfc3339();
        let id: i64 = sqlx::query(
            r#"
            INSERT INTO comments (post_id, parent_id, author_id, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(comment.post_id)
        .bind(comment.parent_id)
        .bind(comment.author_id)
        .bind(&comment.content)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?
        .get(0);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::DatabaseError("评论创建后未找到".to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CommentRecord>, RepositoryError> {
        let sql = format!("{COMMENT_SELECT} WHERE cm.id = ?");
        let row: Option<CommentRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(CommentRecord::try_from).transpose()
    }

    async fn find_by_post(&self, post_id: i64) -> Result<Vec<CommentRecord>, RepositoryError> {
        let sql = format!("{COMMENT_SELECT} WHERE cm.post_id = ? ORDER BY cm.created_at ASC, cm.id ASC");
        let rows: Vec<CommentRow> = sqlx::query_as(&sql)
            .bind(post_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(CommentRecord::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NewPost, NewUser, PostRepositoryPort, UserRepositoryPort};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqlitePostRepository, SqliteUserRepository,
    };

    async fn seeded_repo() -> (SqliteCommentRepository, i64, i64) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let users = SqliteUserRepository::new(pool.clone());
        let author = users
            .create(NewUser {
                username: "commenter".to_string(),
                email: "commenter@example.com".to_string(),
                password_hash: "$2b$04$hash".to_string(),
            })
            .await
            .unwrap();

        let posts = SqlitePostRepository::new(pool.clone());
        let post_id = posts
            .create(NewPost {
                title: "Discussion".to_string(),
                content: "content long enough".to_string(),
                excerpt: "content long enough".to_string(),
                author_id: author.id,
                category_id: 1,
                tags: vec![],
            })
            .await
            .unwrap();

        (SqliteCommentRepository::new(pool), author.id, post_id)
    }

    #[tokio::test]
    async fn test_create_returns_full_record() {
        let (repo, author_id, post_id) = seeded_repo().await;
        let comment = repo
            .create(NewComment {
                post_id,
                parent_id: None,
                author_id,
                content: "first!".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(comment.post_id, post_id);
        assert_eq!(comment.author_username, "commenter");
        assert_eq!(comment.parent_id, None);
        assert_eq!(comment.like_count, 0);
    }

    #[tokio::test]
    async fn test_find_by_post_ordered_ascending() {
        let (repo, author_id, post_id) = seeded_repo().await;
        let first = repo
            .create(NewComment {
                post_id,
                parent_id: None,
                author_id,
                content: "older".to_string(),
            })
            .await
            .unwrap();
        let reply = repo
            .create(NewComment {
                post_id,
                parent_id: Some(first.id),
                author_id,
                content: "newer".to_string(),
            })
            .await
            .unwrap();

        let comments = repo.find_by_post(post_id).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, first.id);
        assert_eq!(comments[1].parent_id, Some(first.id));
        assert_eq!(reply.parent_id, Some(first.id));
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let (repo, _, _) = seeded_repo().await;
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }
}
