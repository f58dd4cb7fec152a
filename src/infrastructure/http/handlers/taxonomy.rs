//! Taxonomy Handlers - 分类与标签

use axum::extract::State;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{ListCategories, ListPopularTags};
use crate::infrastructure::http::dto::{CategoryDto, TagDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{Json, Query};
use crate::infrastructure::http::state::AppState;

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    let categories = state.list_categories_handler.handle(ListCategories).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

fn default_tag_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct TagsQuery {
    #[serde(default = "default_tag_limit")]
    pub limit: u32,
}

pub async fn list_tags(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TagsQuery>,
) -> Result<Json<Vec<TagDto>>, ApiError> {
    let tags = state
        .list_popular_tags_handler
        .handle(ListPopularTags { limit: query.limit })
        .await?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}
