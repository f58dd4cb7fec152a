//! SQLite Post Repository
//!
//! 帖子及其标签关联的持久化。创建/更新时的标签 upsert 在事务内完成

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, Row, Sqlite, Transaction};

use super::{parse_datetime, DbPool};
use crate::application::ports::{
    NewPost, PostDetailRecord, PostListFilter, PostListPage, PostListRecord, PostPatch,
    PostRepositoryPort, PostSort, RepositoryError, TagRecord,
};

/// SQLite Post Repository
pub struct SqlitePostRepository {
    pool: DbPool,
}

impl SqlitePostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 获取帖子的标签列表
    async fn tags_for_post(&self, post_id: i64) -> Result<Vec<TagRecord>, RepositoryError> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN post_tags pt ON t.id = pt.tag_id
            WHERE pt.post_id = ?
            ORDER BY t.name ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| TagRecord {
                id,
                name,
                post_count: 0,
            })
            .collect())
    }
}

/// 查找或创建标签并关联到帖子
async fn link_tags(
    tx: &mut Transaction<'_, Sqlite>,
    post_id: i64,
    tags: &[String],
) -> Result<(), RepositoryError> {
    for name in tags {
        let tag_id: i64 = match sqlx::query("SELECT id FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut **tx)
            .await?
        {
            Some(row) => row.get(0),
            None => sqlx::query("INSERT INTO tags (name) VALUES (?) RETURNING id")
                .bind(name)
                .fetch_one(&mut **tx)
                .await?
                .get(0),
        };

        sqlx::query(
            "INSERT INTO post_tags (post_id, tag_id) VALUES (?, ?) ON CONFLICT DO NOTHING",
        )
        .bind(post_id)
        .bind(tag_id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

#[derive(FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    excerpt: String,
    author_id: i64,
    author_username: String,
    author_avatar: Option<String>,
    category_id: i64,
    category_name: String,
    category_description: Option<String>,
    category_color: Option<String>,
    view_count: i64,
    like_count: i64,
    comment_count: i64,
    created_at: String,
    updated_at: String,
}

impl PostRow {
    fn into_record(self, tags: Vec<TagRecord>) -> Result<PostDetailRecord, RepositoryError> {
        let summary = PostListRecord {
            id: self.id,
            title: self.title,
            excerpt: self.excerpt,
            author_id: self.author_id,
            author_username: self.author_username,
            author_avatar: self.author_avatar,
            category_id: self.category_id,
            category_name: self.category_name,
            category_description: self.category_description,
            category_color: self.category_color,
            tags,
            view_count: self.view_count,
            like_count: self.like_count,
            comment_count: self.comment_count,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        };
        Ok(PostDetailRecord {
            summary,
            content: self.content,
        })
    }
}

/// 帖子查询的公共 SELECT 片段（作者/分类连接 + 评论计数子查询）
const POST_SELECT: &str = r#"
    SELECT p.id, p.title, p.content, p.excerpt,
           u.id AS author_id, u.username AS author_username, u.avatar AS author_avatar,
           c.id AS category_id, c.name AS category_name,
           c.description AS category_description, c.color AS category_color,
           p.view_count, p.like_count,
           (SELECT COUNT(*) FROM comments WHERE post_id = p.id) AS comment_count,
           p.created_at, p.updated_at
    FROM posts p
    JOIN users u ON p.author_id = u.id
    JOIN categories c ON p.category_id = c.id
"#;

#[async_trait]
impl PostRepositoryPort for SqlitePostRepository {
    async fn create(&self, post: NewPost) -> Result<i64, RepositoryError> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        let post_id: i64 = sqlx::query(
            r#"
            INSERT INTO posts (title, content, excerpt, author_id, category_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(post.author_id)
        .bind(post.category_id)
        .bind(&now)
        .bind(&now)
        .fetch_one(&mut *tx)
        .await?
        .get(0);

        link_tags(&mut tx, post_id, &post.tags).await?;

        tx.commit().await?;
        Ok(post_id)
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let has_field_update = patch.title.is_some()
            || patch.content.is_some()
            || patch.excerpt.is_some()
            || patch.category_id.is_some();

        if has_field_update {
            let mut sql = String::from("UPDATE posts SET updated_at = ?");
            if patch.title.is_some() {
                sql.push_str(", title = ?");
            }
            if patch.content.is_some() {
                sql.push_str(", content = ?");
            }
            if patch.excerpt.is_some() {
                sql.push_str(", excerpt = ?");
            }
            if patch.category_id.is_some() {
                sql.push_str(", category_id = ?");
            }
            sql.push_str(" WHERE id = ?");

            let mut query = sqlx::query(&sql).bind(Utc::now().to_rfc3339());
            if let Some(title) = &patch.title {
                query = query.bind(title);
            }
            if let Some(content) = &patch.content {
                query = query.bind(content);
            }
            if let Some(excerpt) = &patch.excerpt {
                query = query.bind(excerpt);
            }
            if let Some(category_id) = patch.category_id {
                query = query.bind(category_id);
            }
            query.bind(id).execute(&mut *tx).await?;
        }

        // tags 为 Some 时整体重建关联
        if let Some(tags) = &patch.tags {
            sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_tags(&mut tx, id, tags).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        // 显式级联删除，不依赖连接级外键开关
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comments WHERE post_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_detail(&self, id: i64) -> Result<Option<PostDetailRecord>, RepositoryError> {
        let sql = format!("{POST_SELECT} WHERE p.id = ?");
        let row: Option<PostRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let tags = self.tags_for_post(row.id).await?;
        Ok(Some(row.into_record(tags)?))
    }

    async fn list(&self, filter: &PostListFilter) -> Result<PostListPage, RepositoryError> {
        let mut where_clause = String::from(" WHERE 1=1");
        if filter.category_id.is_some() {
            where_clause.push_str(" AND p.category_id = ?");
        }
        if filter.tag.is_some() {
            where_clause.push_str(
                " AND EXISTS (SELECT 1 FROM post_tags pt \
                 JOIN tags t ON pt.tag_id = t.id \
                 WHERE pt.post_id = p.id AND t.name = ?)",
            );
        }

        let order_by = match filter.sort {
            PostSort::Hot => " ORDER BY (p.view_count + p.like_count * 2) DESC, p.created_at DESC",
            PostSort::Time => " ORDER BY p.created_at DESC",
        };

        let offset = (filter.page.saturating_sub(1)) as i64 * filter.limit as i64;
        let sql = format!("{POST_SELECT}{where_clause}{order_by} LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, PostRow>(&sql);
        if let Some(category_id) = filter.category_id {
            query = query.bind(category_id);
        }
        if let Some(tag) = &filter.tag {
            query = query.bind(tag);
        }
        let rows: Vec<PostRow> = query
            .bind(filter.limit as i64)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        // 总数查询复用同一筛选条件
        let count_sql = format!("SELECT COUNT(*) FROM posts p{where_clause}");
        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        if let Some(category_id) = filter.category_id {
            count_query = count_query.bind(category_id);
        }
        if let Some(tag) = &filter.tag {
            count_query = count_query.bind(tag);
        }
        let (total,): (i64,) = count_query.fetch_one(&self.pool).await?;

        let mut posts = Vec::with_capacity(rows.len());
        for row in rows {
            let tags = self.tags_for_post(row.id).await?;
            posts.push(row.into_record(tags)?.summary);
        }

        Ok(PostListPage { posts, total })
    }

    async fn increment_view_count(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE posts SET view_count = view_count + 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn increment_like_count(&self, id: i64) -> Result<Option<i64>, RepositoryError> {
        let row: Option<(i64,)> = sqlx::query_as(
            "UPDATE posts SET like_count = like_count + 1 WHERE id = ? RETURNING like_count",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(count,)| count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NewUser, UserRepositoryPort};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteUserRepository,
    };

    async fn seeded_repo() -> (SqlitePostRepository, i64) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let users = SqliteUserRepository::new(pool.clone());
        let author = users
            .create(NewUser {
                username: "author".to_string(),
                email: "author@example.com".to_string(),
                password_hash: "$2b$04$hash".to_string(),
            })
            .await
            .unwrap();

        (SqlitePostRepository::new(pool), author.id)
    }

    fn new_post(author_id: i64, title: &str, tags: &[&str]) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: "content long enough".to_string(),
            excerpt: "content long enough".to_string(),
            author_id,
            category_id: 1,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_with_tags_and_find_detail() {
        let (repo, author_id) = seeded_repo().await;
        let post_id = repo
            .create(new_post(author_id, "First post", &["rust", "web"]))
            .await
            .unwrap();

        let detail = repo.find_detail(post_id).await.unwrap().unwrap();
        assert_eq!(detail.summary.title, "First post");
        assert_eq!(detail.summary.author_username, "author");
        assert_eq!(detail.summary.category_name, "综合讨论");
        let tag_names: Vec<&str> = detail.summary.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tag_names, vec!["rust", "web"]);
    }

    #[tokio::test]
    async fn test_shared_tags_not_duplicated() {
        let (repo, author_id) = seeded_repo().await;
        repo.create(new_post(author_id, "Post one!", &["rust"]))
            .await
            .unwrap();
        repo.create(new_post(author_id, "Post two!", &["rust"]))
            .await
            .unwrap();

        let (tag_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tags")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(tag_count, 1);
    }

    #[tokio::test]
    async fn test_update_replaces_tags() {
        let (repo, author_id) = seeded_repo().await;
        let post_id = repo
            .create(new_post(author_id, "Tagged post", &["old"]))
            .await
            .unwrap();

        repo.update(
            post_id,
            PostPatch {
                title: Some("Renamed post".to_string()),
                tags: Some(vec!["new".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let detail = repo.find_detail(post_id).await.unwrap().unwrap();
        assert_eq!(detail.summary.title, "Renamed post");
        assert_eq!(detail.summary.tags.len(), 1);
        assert_eq!(detail.summary.tags[0].name, "new");
    }

    #[tokio::test]
    async fn test_list_filters_by_tag() {
        let (repo, author_id) = seeded_repo().await;
        repo.create(new_post(author_id, "Rust post", &["rust"]))
            .await
            .unwrap();
        repo.create(new_post(author_id, "Go post!", &["go"]))
            .await
            .unwrap();

        let page = repo
            .list(&PostListFilter {
                page: 1,
                limit: 20,
                sort: PostSort::Time,
                category_id: None,
                tag: Some("rust".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.posts[0].title, "Rust post");
    }

    #[tokio::test]
    async fn test_hot_sort_weights_likes() {
        let (repo, author_id) = seeded_repo().await;
        let cold = repo.create(new_post(author_id, "Cold post", &[])).await.unwrap();
        let hot = repo.create(new_post(author_id, "Hot post!", &[])).await.unwrap();

        for _ in 0..3 {
            repo.increment_like_count(hot).await.unwrap();
        }
        repo.increment_view_count(cold).await.unwrap();

        let page = repo
            .list(&PostListFilter {
                page: 1,
                limit: 20,
                sort: PostSort::Hot,
                category_id: None,
                tag: None,
            })
            .await
            .unwrap();
        assert_eq!(page.posts[0].id, hot);
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let (repo, author_id) = seeded_repo().await;
        let post_id = repo
            .create(new_post(author_id, "Doomed post", &["tag"]))
            .await
            .unwrap();

        assert!(repo.delete(post_id).await.unwrap());
        assert!(repo.find_detail(post_id).await.unwrap().is_none());
        assert!(!repo.delete(post_id).await.unwrap());

        let (links,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM post_tags")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(links, 0);
    }

    #[tokio::test]
    async fn test_increment_like_returns_new_count() {
        let (repo, author_id) = seeded_repo().await;
        let post_id = repo.create(new_post(author_id, "Liked post", &[])).await.unwrap();

        assert_eq!(repo.increment_like_count(post_id).await.unwrap(), Some(1));
        assert_eq!(repo.increment_like_count(post_id).await.unwrap(), Some(2));
        assert_eq!(repo.increment_like_count(9999).await.unwrap(), None);
    }
}
