pub mod error;
pub mod query;
pub mod seed;
pub mod source;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use query::{ArticlePage, CategoryFilter, Pagination};
pub use source::{create_source, ArticleSource, SeedSource};
pub use store::ArticleStore;
pub use types::{Article, Category};

pub mod prelude {
    pub use crate::query;
    pub use crate::{Article, ArticlePage, ArticleStore, Category, CategoryFilter, Error, Pagination, Result};
}
