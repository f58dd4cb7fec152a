//! Taxonomy Query Handlers - 分类与标签查询

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRecord, CategoryRepositoryPort, TagRecord, TagRepositoryPort};
use crate::application::queries::{ListCategories, ListPopularTags, MAX_PAGE_LIMIT};

/// ListCategories Handler
pub struct ListCategoriesHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(
        &self,
        _query: ListCategories,
    ) -> Result<Vec<CategoryRecord>, ApplicationError> {
        Ok(self.category_repo.find_all().await?)
    }
}

/// ListPopularTags Handler
pub struct ListPopularTagsHandler {
    tag_repo: Arc<dyn TagRepositoryPort>,
}

impl ListPopularTagsHandler {
    pub fn new(tag_repo: Arc<dyn TagRepositoryPort>) -> Self {
        Self { tag_repo }
    }

    pub async fn handle(
        &self,
        query: ListPopularTags,
    ) -> Result<Vec<TagRecord>, ApplicationError> {
        let limit = query.limit.clamp(1, MAX_PAGE_LIMIT);
        Ok(self.tag_repo.find_popular(limit).await?)
    }
}
