use std::sync::Arc;

use np_core::{ArticleStore, Pagination};

use crate::config::ServerConfig;

pub struct AppState {
    pub store: Arc<ArticleStore>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(store: ArticleStore, config: ServerConfig) -> Self {
        Self { store: Arc::new(store), config }
    }

    pub fn pagination(&self, limit: Option<i64>, page: Option<i64>) -> Pagination {
        Pagination::from_params(limit, page, self.config.default_limit, self.config.max_limit)
    }

    /// Search has no page, only a bounded result count.
    pub fn search_limit(&self, limit: Option<i64>) -> usize {
        self.pagination(limit, None).limit
    }
}
