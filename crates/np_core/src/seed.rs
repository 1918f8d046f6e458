use chrono::{DateTime, Utc};

use crate::types::{Article, Category};
use crate::{Error, Result};

struct SeedArticle {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    content: &'static str,
    author: &'static str,
    published_at: &'static str,
    category: Category,
    tags: &'static [&'static str],
    image_url: &'static str,
    source_name: &'static str,
    source_url: &'static str,
}

const SEED: &[SeedArticle] = &[
    SeedArticle {
        id: "tech-1",
        title: "AI Breakthrough in Natural Language Processing",
        summary: "Researchers achieve new milestone in AI understanding with transformers.",
        content: "A team of researchers has unveiled a transformer architecture that sets new \
                  records on reading comprehension benchmarks. The model needs far less \
                  labelled data than its predecessors.",
        author: "Dr. Sarah Chen",
        published_at: "2025-01-15T10:30:00Z",
        category: Category::Technology,
        tags: &["AI", "NLP", "Research"],
        image_url: "https://via.placeholder.com/400x200/0066cc/white?text=AI+News",
        source_name: "Example Tech",
        source_url: "https://example.com/tech-1",
    },
    SeedArticle {
        id: "tech-2",
        title: "Quantum Computing Reaches New Milestone",
        summary: "IBM announces breakthrough in quantum error correction.",
        content: "Engineers demonstrated logical qubits that outlive their physical \
                  counterparts, a long-sought step toward fault-tolerant quantum computers.",
        author: "Michael Rodriguez",
        published_at: "2025-01-14T14:45:00Z",
        category: Category::Technology,
        tags: &["Quantum", "Hardware"],
        image_url: "https://via.placeholder.com/400x200/6600cc/white?text=Quantum+Computing",
        source_name: "Example Tech",
        source_url: "https://example.com/tech-2",
    },
    SeedArticle {
        id: "biz-1",
        title: "Global Markets Rally on Economic Optimism",
        summary: "Stocks worldwide rise amid positive indicators.",
        content: "Equity indexes across Europe, Asia and the Americas closed higher after \
                  inflation figures came in below forecasts.",
        author: "Jennifer Walsh",
        published_at: "2025-01-15T08:15:00Z",
        category: Category::Business,
        tags: &["Markets", "Economy"],
        image_url: "https://via.placeholder.com/400x200/cc6600/white?text=Market+Rally",
        source_name: "Example Business",
        source_url: "https://example.com/biz-1",
    },
    SeedArticle {
        id: "sports-1",
        title: "Championship Finals This Weekend",
        summary: "Two powerhouse teams prepare for the ultimate showdown.",
        content: "Both squads enter the finals unbeaten at home, and tickets sold out \
                  within minutes of going on sale.",
        author: "David Kim",
        published_at: "2025-01-15T16:20:00Z",
        category: Category::Sports,
        tags: &["Finals", "Championship"],
        image_url: "https://via.placeholder.com/400x200/cc0066/white?text=Championship",
        source_name: "Example Sports",
        source_url: "https://example.com/sports-1",
    },
];

fn parse_timestamp(id: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::InvalidArticle(format!("article {} has an invalid timestamp: {}", id, e)))
}

/// The demonstration article set served when no real source is configured.
pub fn seed_articles() -> Result<Vec<Article>> {
    SEED.iter()
        .map(|s| {
            Ok(Article {
                id: s.id.to_string(),
                title: s.title.to_string(),
                summary: s.summary.to_string(),
                content: s.content.to_string(),
                author: s.author.to_string(),
                published_at: parse_timestamp(s.id, s.published_at)?,
                category: s.category,
                tags: s.tags.iter().map(|t| t.to_string()).collect(),
                image_url: s.image_url.to_string(),
                source_name: s.source_name.to_string(),
                source_url: s.source_url.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_well_formed() {
        let articles = seed_articles().unwrap();
        assert_eq!(articles.len(), 4);
        for article in &articles {
            article.validate().unwrap();
        }
        assert_eq!(articles[0].id, "tech-1");
        assert_eq!(articles[0].published_at.to_rfc3339(), "2025-01-15T10:30:00+00:00");
    }
}
