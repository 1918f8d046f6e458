use async_trait::async_trait;

use crate::seed::seed_articles;
use crate::types::Article;
use crate::{Error, Result};

/// Where a store gets its articles from. Real feeds plug in here.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Short name used in configuration and logs
    fn name(&self) -> &str;

    /// Fetch every article the source currently offers
    async fn fetch_articles(&self) -> Result<Vec<Article>>;
}

/// Built-in demonstration articles.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedSource;

#[async_trait]
impl ArticleSource for SeedSource {
    fn name(&self) -> &str {
        "seed"
    }

    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        seed_articles()
    }
}

pub const AVAILABLE_SOURCES: &[&str] = &["seed"];

pub fn create_source(name: &str) -> Result<Box<dyn ArticleSource>> {
    match name.trim().to_lowercase().as_str() {
        "seed" => Ok(Box::new(SeedSource)),
        other => Err(Error::Config(format!(
            "unknown article source '{}', available: {}",
            other,
            AVAILABLE_SOURCES.join(", ")
        ))),
    }
}
