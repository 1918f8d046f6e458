//! Read-only views over an [`ArticleStore`].
//!
//! Every function here is pure. Results keep store insertion order, except
//! [`list_latest`], and invalid parameters narrow the result instead of failing.

use serde::Serialize;

use crate::store::ArticleStore;
use crate::types::{Article, Category};
use crate::{Error, Result};

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_PAGE: usize = 1;
pub const MAX_LIMIT: usize = 100;

/// Category restriction parsed from an optional request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// The caller named a category outside the enumeration; matches nothing.
    Unmatched,
}

impl CategoryFilter {
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(value) => value
                .parse::<Category>()
                .map(CategoryFilter::Only)
                .unwrap_or(CategoryFilter::Unmatched),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => article.category == *category,
            CategoryFilter::Unmatched => false,
        }
    }
}

/// 1-based page selection. A zero limit or page selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT, page: DEFAULT_PAGE }
    }
}

impl Pagination {
    pub fn new(limit: usize, page: usize) -> Self {
        Self { limit, page }
    }

    /// Builds a pagination from raw request values. Negative values select
    /// nothing, limits above `max_limit` are clamped.
    pub fn from_params(limit: Option<i64>, page: Option<i64>, default_limit: usize, max_limit: usize) -> Self {
        let limit = limit.map_or(default_limit, non_negative).min(max_limit);
        let page = page.map_or(DEFAULT_PAGE, non_negative);
        Self { limit, page }
    }

    fn offset(&self) -> Option<usize> {
        if self.limit == 0 || self.page == 0 {
            return None;
        }
        (self.page - 1).checked_mul(self.limit)
    }
}

/// Clamps a raw request value into `usize`, mapping negatives to zero.
pub fn non_negative(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// A slice of matching articles plus the match count before slicing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total: usize,
}

pub fn list(store: &ArticleStore, filter: CategoryFilter, pagination: Pagination) -> ArticlePage {
    let matching: Vec<&Article> = store.articles().iter().filter(|a| filter.matches(a)).collect();
    paginate(matching, pagination)
}

/// Like [`list`], but the whole matching set is ordered newest first before
/// the page is cut, so page 1 holds the most recent articles.
pub fn list_latest(store: &ArticleStore, filter: CategoryFilter, pagination: Pagination) -> ArticlePage {
    let mut matching: Vec<&Article> = store.articles().iter().filter(|a| filter.matches(a)).collect();
    matching.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    paginate(matching, pagination)
}

fn paginate(matching: Vec<&Article>, pagination: Pagination) -> ArticlePage {
    let total = matching.len();

    let articles = match pagination.offset() {
        Some(offset) => matching
            .into_iter()
            .skip(offset)
            .take(pagination.limit)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    ArticlePage { articles, total }
}

pub fn get_article<'a>(store: &'a ArticleStore, id: &str) -> Result<&'a Article> {
    store.get(id).ok_or_else(|| Error::NotFound(id.to_string()))
}

pub fn list_categories(store: &ArticleStore) -> Vec<Category> {
    store.categories().to_vec()
}

/// Case-insensitive substring search over title, summary, content and tags.
/// An empty query matches every article.
pub fn search(store: &ArticleStore, query: &str, filter: CategoryFilter, limit: usize) -> ArticlePage {
    let needle = query.to_lowercase();
    let matching: Vec<&Article> = store
        .articles()
        .iter()
        .filter(|a| filter.matches(a) && a.matches_lowercase(&needle))
        .collect();
    let total = matching.len();

    ArticlePage {
        articles: matching.into_iter().take(limit).cloned().collect(),
        total,
    }
}
