//! SQLite Category / Tag Repository
//!
//! 分类与标签均为只读聚合，帖子计数通过子查询统计

use async_trait::async_trait;

use super::DbPool;
use crate::application::ports::{
    CategoryRecord, CategoryRepositoryPort, RepositoryError, TagRecord, TagRepositoryPort,
};

/// SQLite Category Repository
pub struct SqliteCategoryRepository {
    pool: DbPool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type CategoryTuple = (i64, String, Option<String>, Option<String>, i64);

fn category_from_tuple((id, name, description, color, post_count): CategoryTuple) -> CategoryRecord {
    CategoryRecord {
        id,
        name,
        description,
        color,
        post_count,
    }
}

const CATEGORY_SELECT: &str = r#"
    SELECT c.id, c.name, c.description, c.color,
           (SELECT COUNT(*) FROM posts WHERE category_id = c.id) AS post_count
    FROM categories c
"#;

#[async_trait]
impl CategoryRepositoryPort for SqliteCategoryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryRecord>, RepositoryError> {
        let sql = format!("{CATEGORY_SELECT} ORDER BY c.id ASC");
        let rows: Vec<CategoryTuple> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(category_from_tuple).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CategoryRecord>, RepositoryError> {
        let sql = format!("{CATEGORY_SELECT} WHERE c.id = ?");
        let row: Option<CategoryTuple> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(category_from_tuple))
    }
}

/// SQLite Tag Repository
pub struct SqliteTagRepository {
    pool: DbPool,
}

impl SqliteTagRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepositoryPort for SqliteTagRepository {
    async fn find_popular(&self, limit: u32) -> Result<Vec<TagRecord>, RepositoryError> {
        let rows: Vec<(i64, String, i64)> = sqlx::query_as(
            r#"
            SELECT t.id, t.name,
                   (SELECT COUNT(*) FROM post_tags WHERE tag_id = t.id) AS post_count
            FROM tags t
            ORDER BY post_count DESC, t.name ASC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, post_count)| TagRecord {
                id,
                name,
                post_count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NewPost, NewUser, PostRepositoryPort, UserRepositoryPort};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqlitePostRepository, SqliteUserRepository,
    };

    async fn seeded_pool() -> DbPool {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    async fn seed_post(pool: &DbPool, title: &str, category_id: i64, tags: &[&str]) {
        let users = SqliteUserRepository::new(pool.clone());
        let author = match users.find_by_username("poster").await.unwrap() {
            Some(user) => user,
            None => users
                .create(NewUser {
                    username: "poster".to_string(),
                    email: "poster@example.com".to_string(),
                    password_hash: "$2b$04$hash".to_string(),
                })
                .await
                .unwrap(),
        };

        SqlitePostRepository::new(pool.clone())
            .create(NewPost {
                title: title.to_string(),
                content: "content long enough".to_string(),
                excerpt: "content long enough".to_string(),
                author_id: author.id,
                category_id,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_categories_include_post_counts() {
        let pool = seeded_pool().await;
        seed_post(&pool, "Post one!", 1, &[]).await;
        seed_post(&pool, "Post two!", 1, &[]).await;

        let repo = SqliteCategoryRepository::new(pool);
        let categories = repo.find_all().await.unwrap();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].post_count, 2);
        assert_eq!(categories[1].post_count, 0);
    }

    #[tokio::test]
    async fn test_find_category_by_id() {
        let pool = seeded_pool().await;
        let repo = SqliteCategoryRepository::new(pool);
        assert!(repo.find_by_id(1).await.unwrap().is_some());
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_popular_tags_ordered_by_usage() {
        let pool = seeded_pool().await;
        seed_post(&pool, "Post one!", 1, &["rust", "web"]).await;
        seed_post(&pool, "Post two!", 1, &["rust"]).await;

        let repo = SqliteTagRepository::new(pool);
        let tags = repo.find_popular(20).await.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "rust");
        assert_eq!(tags[0].post_count, 2);
        assert_eq!(tags[1].name, "web");

        let limited = repo.find_popular(1).await.unwrap();
        assert_eq!(limited.len(), 1);
    }
}
