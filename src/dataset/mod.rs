use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::dataset::error::DatasetError;

pub mod error;
pub mod types;

pub use types::{ArticleId, ArticleRecord, RelatedPaper, RelationDataset, RelationEntry};

const BUNDLED_ARTICLES: &str = include_str!("../../data/hackernews_top.json");
const BUNDLED_RELATIONS: &str = include_str!("../../data/document_relations.json");

pub fn parse_articles(content: &str) -> Result<Vec<ArticleRecord>, DatasetError> {
    serde_json::from_str(content).map_err(|source| DatasetError::Parse {
        dataset: "article",
        source,
    })
}

pub fn parse_relations(content: &str) -> Result<RelationDataset, DatasetError> {
    serde_json::from_str(content).map_err(|source| DatasetError::Parse {
        dataset: "relation",
        source,
    })
}

pub fn load_articles(path: &Path) -> Result<Vec<ArticleRecord>, DatasetError> {
    let articles = parse_articles(&read(path)?)?;
    info!("loaded {} articles from {}", articles.len(), path.display());
    Ok(articles)
}

pub fn load_relations(path: &Path) -> Result<RelationDataset, DatasetError> {
    let relations = parse_relations(&read(path)?)?;
    info!(
        "loaded {} relation entries from {}",
        relations.len(),
        path.display()
    );
    Ok(relations)
}

/// Collapses articles sharing a title (compared lowercased and trimmed) into
/// the one with the latest `time`. Survivors keep the position of the first
/// occurrence of their title; records without a string title are kept as-is.
/// On equal or missing `time` the earlier record stays.
pub fn dedup_articles(articles: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    let total = articles.len();
    let mut kept: Vec<ArticleRecord> = Vec::with_capacity(total);
    let mut by_title: HashMap<String, usize> = HashMap::new();

    for article in articles {
        let Some(title) = article.as_value().get("title").and_then(|t| t.as_str()) else {
            kept.push(article);
            continue;
        };
        let key = title.trim().to_lowercase();

        match by_title.get(&key) {
            Some(&slot) => {
                debug!("duplicate title: {}", key);
                if is_newer(&article, &kept[slot]) {
                    kept[slot] = article;
                }
            }
            None => {
                by_title.insert(key, kept.len());
                kept.push(article);
            }
        }
    }

    if kept.len() < total {
        info!("removed {} duplicate articles", total - kept.len());
    }
    kept
}

fn is_newer(candidate: &ArticleRecord, existing: &ArticleRecord) -> bool {
    let time = |a: &ArticleRecord| a.as_value().get("time").and_then(|t| t.as_f64());
    match (time(candidate), time(existing)) {
        (Some(c), Some(e)) => c > e,
        _ => false,
    }
}

/// Articles compiled into the binary.
pub fn bundled_articles() -> Result<Vec<ArticleRecord>, DatasetError> {
    parse_articles(BUNDLED_ARTICLES)
}

/// Relations compiled into the binary.
pub fn bundled_relations() -> Result<RelationDataset, DatasetError> {
    parse_relations(BUNDLED_RELATIONS)
}

fn read(path: &Path) -> Result<String, DatasetError> {
    std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
