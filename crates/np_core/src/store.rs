use std::collections::HashSet;

use tracing::debug;

use crate::source::ArticleSource;
use crate::types::{Article, Category};
use crate::{Error, Result};

/// Immutable collection of articles, built once at startup.
///
/// Insertion order is preserved and is the order every query returns
/// results in. The distinct categories are derived on construction, in
/// order of first appearance.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    articles: Vec<Article>,
    categories: Vec<Category>,
}

impl ArticleStore {
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut categories = Vec::new();
        {
            let mut seen = HashSet::new();
            for article in &articles {
                article.validate()?;
                if !seen.insert(article.id.as_str()) {
                    return Err(Error::InvalidArticle(format!("duplicate article id: {}", article.id)));
                }
                if !categories.contains(&article.category) {
                    categories.push(article.category);
                }
            }
        }

        debug!("Built article store with {} articles in {} categories", articles.len(), categories.len());
        Ok(Self { articles, categories })
    }

    pub async fn from_source(source: &dyn ArticleSource) -> Result<Self> {
        let articles = source.fetch_articles().await?;
        Self::new(articles)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SeedSource;
    use crate::types::fixtures::article;

    #[test]
    fn test_rejects_duplicate_ids() {
        let articles = vec![
            article("tech-1", Category::Technology, &[]),
            article("tech-1", Category::Business, &[]),
        ];
        let err = ArticleStore::new(articles).unwrap_err();
        assert!(matches!(err, Error::InvalidArticle(msg) if msg.contains("tech-1")));
    }

    #[test]
    fn test_categories_follow_first_appearance() {
        let store = ArticleStore::new(vec![
            article("biz-1", Category::Business, &[]),
            article("tech-1", Category::Technology, &[]),
            article("biz-2", Category::Business, &[]),
        ])
        .unwrap();
        assert_eq!(store.categories(), &[Category::Business, Category::Technology]);
    }

    #[test]
    fn test_empty_store() {
        let store = ArticleStore::new(vec![]).unwrap();
        assert!(store.is_empty());
        assert!(store.categories().is_empty());
        assert!(store.get("tech-1").is_none());
    }

    #[tokio::test]
    async fn test_from_seed_source() {
        let store = ArticleStore::from_source(&SeedSource).await.unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.get("biz-1").map(|a| a.category), Some(Category::Business));
    }
}
