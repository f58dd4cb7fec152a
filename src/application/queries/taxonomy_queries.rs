//! Taxonomy Queries - 分类与标签查询

/// 获取所有分类查询
#[derive(Debug, Clone)]
pub struct ListCategories;

/// 获取热门标签查询
#[derive(Debug, Clone)]
pub struct ListPopularTags {
    pub limit: u32,
}

impl Default for ListPopularTags {
    fn default() -> Self {
        Self { limit: 20 }
    }
}
