use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use np_core::{query, Article, ArticlePage, CategoryFilter};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// Treats `?limit=` the same as an absent parameter.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsParams {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
}

pub async fn list_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsParams>,
) -> Json<ArticlePage> {
    let filter = CategoryFilter::from_param(params.category.as_deref());
    let pagination = state.pagination(params.limit, params.page);
    debug!("Listing news: {:?} {:?}", filter, pagination);
    Json(query::list(&state.store, filter, pagination))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    debug!("Fetching article {}", id);
    let article = query::get_article(&state.store, &id)?;
    Ok(Json(article.clone()))
}

pub async fn list_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "categories": query::list_categories(&state.store) }))
}

pub async fn search_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<ArticlePage> {
    let filter = CategoryFilter::from_param(params.category.as_deref());
    let limit = state.search_limit(params.limit);
    debug!("Searching news for {:?} in {:?}, limit {}", params.q, filter, limit);
    Json(query::search(&state.store, &params.q, filter, limit))
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "articles": state.store.len() }))
}
