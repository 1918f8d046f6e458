use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::{Error, Result};

/// The fixed set of sections an article can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Business,
    Sports,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Technology, Category::Business, Category::Sports];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Sports => "sports",
        }
    }

    /// Title-case name used in widget subtitles.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Sports => "Sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown category: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub category: Category,
    pub tags: Vec<String>,
    pub image_url: String,
    pub source_name: String,
    pub source_url: String,
}

impl Article {
    /// Checks the fields the type system cannot: non-empty identity and
    /// absolute URLs.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidArticle("article id must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(Error::InvalidArticle(format!("article {} has an empty title", self.id)));
        }
        for (field, value) in [("image_url", &self.image_url), ("source_url", &self.source_url)] {
            Url::parse(value).map_err(|e| {
                Error::InvalidArticle(format!("article {} has an invalid {}: {}", self.id, field, e))
            })?;
        }
        Ok(())
    }

    /// Case-insensitive substring match over title, summary, content and tags.
    /// `needle` must already be lower-cased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::article;
    use super::*;

    #[test]
    fn test_category_parsing_ignores_case() {
        assert_eq!("Technology".parse::<Category>().unwrap(), Category::Technology);
        assert_eq!(" SPORTS ".parse::<Category>().unwrap(), Category::Sports);
        assert!(matches!("weather".parse::<Category>(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Business).unwrap();
        assert_eq!(json, "\"business\"");
    }

    #[test]
    fn test_validate_rejects_bad_records() {
        let mut a = article("tech-1", Category::Technology, &[]);
        assert!(a.validate().is_ok());

        a.source_url = "not a url".to_string();
        assert!(matches!(a.validate(), Err(Error::InvalidArticle(_))));

        let mut b = article("biz-1", Category::Business, &[]);
        b.id = "  ".to_string();
        assert!(matches!(b.validate(), Err(Error::InvalidArticle(_))));
    }

    #[test]
    fn test_matches_tags_and_body() {
        let a = article("tech-1", Category::Technology, &["AI"]);
        assert!(a.matches_lowercase("ai"));
        assert!(a.matches_lowercase("body text"));
        assert!(!a.matches_lowercase("quantum"));
    }
}
