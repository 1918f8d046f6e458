//! HTML widget templates rendered inline by the ChatGPT Apps client.
//!
//! The client fetches the template as a `text/html+skybridge` resource and
//! feeds it the tool's `structuredContent` through `window.openai.toolOutput`.

use np_core::{Article, ArticlePage};
use serde_json::{json, Value};

pub const MIME_TYPE: &str = "text/html+skybridge";
pub const LINK_LABEL: &str = "Read full article →";

#[derive(Debug)]
pub struct Widget {
    pub uri: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub invoking: &'static str,
    pub invoked: &'static str,
    pub html: &'static str,
}

pub const NEWS_CAROUSEL: Widget = Widget {
    uri: "ui://widget/news-carousel.html",
    title: "News Carousel",
    description: "HTML template for rendering the news carousel",
    invoking: "Fetching latest news",
    invoked: "Displayed news carousel",
    html: include_str!("../../assets/news-carousel.html"),
};

pub const ARTICLE_CARD: Widget = Widget {
    uri: "ui://widget/article-card.html",
    title: "Article Card",
    description: "HTML template for rendering a single article",
    invoking: "Loading article",
    invoked: "Displayed article",
    html: include_str!("../../assets/article-card.html"),
};

pub const WIDGETS: &[&Widget] = &[&NEWS_CAROUSEL, &ARTICLE_CARD];

pub fn find(uri: &str) -> Option<&'static Widget> {
    WIDGETS.iter().copied().find(|w| w.uri == uri)
}

impl Widget {
    /// `_meta` advertised on the tool definition.
    pub fn tool_meta(&self) -> Value {
        json!({
            "openai/outputTemplate": self.uri,
            "openai/toolInvocation/invoking": self.invoking,
            "openai/toolInvocation/invoked": self.invoked,
            "openai/widgetAccessible": true,
            "openai/resultCanProduceWidget": true,
        })
    }

    /// Entry for `resources/list`.
    pub fn resource(&self) -> Value {
        json!({
            "name": self.title,
            "title": self.title,
            "uri": self.uri,
            "description": self.description,
            "mimeType": MIME_TYPE,
            "_meta": self.tool_meta(),
        })
    }

    /// Entry for `resources/read`.
    pub fn contents(&self) -> Value {
        json!({
            "uri": self.uri,
            "mimeType": MIME_TYPE,
            "text": self.html,
            "title": self.title,
        })
    }

    /// `_meta` attached to a tool result, embedding the template itself.
    pub fn result_meta(&self) -> Value {
        json!({
            "openai/widget": { "type": "resource", "resource": self.contents() },
            "openai/outputTemplate": self.uri,
            "openai/widgetAccessible": true,
            "openai/resultCanProduceWidget": true,
        })
    }
}

fn carousel_item(article: &Article) -> Value {
    json!({
        "id": article.id,
        "title": article.title,
        "subtitle": format!("{} · {}", article.category.label(), article.author),
        "description": article.summary,
        "image_url": article.image_url,
        "link": { "url": article.source_url, "label": LINK_LABEL },
    })
}

/// Structured content for the carousel, newest article first.
pub fn carousel(title: &str, page: &ArticlePage) -> Value {
    let mut articles: Vec<&Article> = page.articles.iter().collect();
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    json!({
        "title": title,
        "items": articles.into_iter().map(carousel_item).collect::<Vec<_>>(),
        "total": page.total,
    })
}

pub fn article_card(article: &Article) -> Value {
    json!({
        "article": article,
        "subtitle": format!("{} · {}", article.category.label(), article.author),
        "link": { "url": article.source_url, "label": LINK_LABEL },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use np_core::seed::seed_articles;

    #[test]
    fn test_find_widget_by_uri() {
        assert_eq!(find("ui://widget/news-carousel.html").map(|w| w.title), Some("News Carousel"));
        assert!(find("ui://widget/missing.html").is_none());
    }

    #[test]
    fn test_templates_are_embedded() {
        for widget in WIDGETS {
            assert!(widget.html.contains("window.openai"), "{} has no client hook", widget.uri);
            assert_eq!(widget.contents()["mimeType"], MIME_TYPE);
        }
    }

    #[test]
    fn test_carousel_orders_newest_first() {
        let articles = seed_articles().unwrap();
        let total = articles.len();
        let value = carousel("Latest News", &ArticlePage { articles, total });
        let ids: Vec<&str> = value["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["sports-1", "tech-1", "biz-1", "tech-2"]);
        assert_eq!(value["items"][1]["subtitle"], "Technology · Dr. Sarah Chen");
        assert_eq!(value["items"][1]["link"]["label"], LINK_LABEL);
        assert_eq!(value["total"], 4);
    }
}
