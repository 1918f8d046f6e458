use np_core::{query, Category, CategoryFilter};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::protocol::CallToolResult;
use super::widget::{self, Widget};
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetNewsArgs {
    category: Option<String>,
    limit: Option<i64>,
    page: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetArticleArgs {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListCategoriesArgs {}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchNewsArgs {
    query: String,
    category: Option<String>,
    limit: Option<i64>,
}

fn category_property() -> Value {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    json!({
        "type": "string",
        "description": format!("News category ({}).", names.join(", ")),
    })
}

fn schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_news",
            title: "Get Latest News",
            description: "Returns a carousel of the latest news articles, optionally filtered by category.",
            input_schema: schema(
                json!({
                    "category": category_property(),
                    "limit": { "type": "integer", "minimum": 1, "description": "Articles per page." },
                    "page": { "type": "integer", "minimum": 1, "description": "1-based page number." },
                }),
                &[],
            ),
            meta: Some(widget::NEWS_CAROUSEL.tool_meta()),
        },
        Tool {
            name: "get_article",
            title: "Get Article",
            description: "Returns a single news article by its identifier.",
            input_schema: schema(
                json!({ "id": { "type": "string", "description": "Article identifier, e.g. tech-1." } }),
                &["id"],
            ),
            meta: Some(widget::ARTICLE_CARD.tool_meta()),
        },
        Tool {
            name: "list_categories",
            title: "List Categories",
            description: "Lists the news categories that currently have articles.",
            input_schema: schema(json!({}), &[]),
            meta: None,
        },
        Tool {
            name: "search_news",
            title: "Search News",
            description: "Case-insensitive search over article titles, summaries, bodies and tags.",
            input_schema: schema(
                json!({
                    "query": { "type": "string", "description": "Text to look for." },
                    "category": category_property(),
                    "limit": { "type": "integer", "minimum": 1, "description": "Maximum number of results." },
                }),
                &["query"],
            ),
            meta: Some(widget::NEWS_CAROUSEL.tool_meta()),
        },
    ]
}

fn parse_args<T: DeserializeOwned>(arguments: Option<Value>) -> Result<T, CallToolResult> {
    let arguments = match arguments {
        None | Some(Value::Null) => json!({}),
        Some(value) => value,
    };
    serde_json::from_value(arguments).map_err(|e| CallToolResult::error(format!("Validation error: {}", e)))
}

fn with_widget(result: CallToolResult, widget: &Widget) -> CallToolResult {
    result.with_meta(widget.result_meta())
}

pub fn call(state: &AppState, name: &str, arguments: Option<Value>) -> CallToolResult {
    info!("🔧 Calling tool {}", name);
    let result = match name {
        "get_news" => parse_args(arguments).map(|args| get_news(state, args)),
        "get_article" => parse_args(arguments).map(|args| get_article(state, args)),
        "list_categories" => parse_args(arguments).map(|args| list_categories(state, args)),
        "search_news" => parse_args(arguments).map(|args| search_news(state, args)),
        other => Err(CallToolResult::error(format!("Unknown tool: {}", other))),
    };
    result.unwrap_or_else(|err| {
        debug!("Tool {} failed: {:?}", name, err.content);
        err
    })
}

fn get_news(state: &AppState, args: GetNewsArgs) -> CallToolResult {
    let filter = CategoryFilter::from_param(args.category.as_deref());
    let page = query::list_latest(&state.store, filter, state.pagination(args.limit, args.page));
    let summary = format!("Showing {} of {} articles.", page.articles.len(), page.total);
    with_widget(
        CallToolResult::success(summary, widget::carousel("Latest News", &page)),
        &widget::NEWS_CAROUSEL,
    )
}

fn get_article(state: &AppState, args: GetArticleArgs) -> CallToolResult {
    match query::get_article(&state.store, &args.id) {
        Ok(article) => with_widget(
            CallToolResult::success(format!("{} by {}", article.title, article.author), widget::article_card(article)),
            &widget::ARTICLE_CARD,
        ),
        Err(e) => CallToolResult::error(e.to_string()),
    }
}

fn list_categories(state: &AppState, _args: ListCategoriesArgs) -> CallToolResult {
    let categories = query::list_categories(&state.store);
    let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
    CallToolResult::success(
        format!("Available categories: {}", names.join(", ")),
        json!({ "categories": categories }),
    )
}

fn search_news(state: &AppState, args: SearchNewsArgs) -> CallToolResult {
    let filter = CategoryFilter::from_param(args.category.as_deref());
    let page = query::search(&state.store, &args.query, filter, state.search_limit(args.limit));
    let summary = format!("Found {} articles matching \"{}\".", page.total, args.query);
    let title = format!("Results for \"{}\"", args.query);
    with_widget(
        CallToolResult::success(summary, widget::carousel(&title, &page)),
        &widget::NEWS_CAROUSEL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::Content;
    use crate::ServerConfig;
    use np_core::{ArticleStore, SeedSource};

    async fn state() -> AppState {
        let store = ArticleStore::from_source(&SeedSource).await.unwrap();
        AppState::new(store, ServerConfig::default())
    }

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0] {
            Content::Text { text } => text.as_str(),
        }
    }

    #[test]
    fn test_definitions_forbid_extra_arguments() {
        let tools = definitions();
        let names: Vec<&str> = tools.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["get_news", "get_article", "list_categories", "search_news"]);
        for tool in &tools {
            assert_eq!(tool.input_schema["additionalProperties"], json!(false));
        }
    }

    #[tokio::test]
    async fn test_get_news_by_category() {
        let state = state().await;
        let result = call(&state, "get_news", Some(json!({"category": "Technology"})));
        assert!(!result.is_error);
        let structured = result.structured_content.as_ref().unwrap();
        assert_eq!(structured["total"], 2);
        assert_eq!(structured["items"][0]["id"], "tech-1");
        let meta = result.meta.as_ref().unwrap();
        assert_eq!(meta["openai/outputTemplate"], widget::NEWS_CAROUSEL.uri);
    }

    #[tokio::test]
    async fn test_get_news_pages_newest_first() {
        let state = state().await;
        let item_ids = |page: i64| -> Vec<String> {
            let result = call(&state, "get_news", Some(json!({"limit": 2, "page": page})));
            result.structured_content.unwrap()["items"]
                .as_array()
                .unwrap()
                .iter()
                .map(|item| item["id"].as_str().unwrap().to_string())
                .collect()
        };
        assert_eq!(item_ids(1), vec!["sports-1", "tech-1"]);
        assert_eq!(item_ids(2), vec!["biz-1", "tech-2"]);
    }

    #[tokio::test]
    async fn test_unknown_tool_and_bad_arguments() {
        let state = state().await;
        let unknown = call(&state, "delete_news", None);
        assert!(unknown.is_error);
        assert_eq!(text(&unknown), "Unknown tool: delete_news");

        let extra = call(&state, "get_news", Some(json!({"region": "eu"})));
        assert!(extra.is_error);
        assert!(text(&extra).starts_with("Validation error"));

        let missing = call(&state, "search_news", Some(json!({})));
        assert!(missing.is_error);
    }

    #[tokio::test]
    async fn test_get_article_not_found() {
        let state = state().await;
        let result = call(&state, "get_article", Some(json!({"id": "missing"})));
        assert!(result.is_error);
        assert_eq!(text(&result), "Article not found: missing");

        let found = call(&state, "get_article", Some(json!({"id": "biz-1"})));
        assert_eq!(found.structured_content.unwrap()["article"]["id"], "biz-1");
    }

    #[tokio::test]
    async fn test_search_and_categories() {
        let state = state().await;
        let result = call(&state, "search_news", Some(json!({"query": "AI", "limit": 5})));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["total"], 1);
        assert_eq!(structured["items"][0]["id"], "tech-1");

        let categories = call(&state, "list_categories", Some(Value::Null));
        assert_eq!(
            categories.structured_content.unwrap(),
            json!({"categories": ["technology", "business", "sports"]})
        );
    }
}
