use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::time::{self, Instant};
use tracing::{debug, info};

use crate::dataset::{
    self, error::DatasetError, ArticleId, ArticleRecord, RelatedPaper, RelationDataset,
};

pub mod config;
pub mod error;

pub use config::{CatalogConfig, DEFAULT_FETCH_DELAY};

/// Read-only view over the article and relation datasets.
///
/// Both datasets are loaded once and shared behind `Arc`, so clones are cheap
/// and concurrent fetches never contend. Every fetch resolves after
/// `fetch_delay` without blocking the runtime.
#[derive(Debug, Clone)]
pub struct Catalog {
    articles: Arc<Vec<ArticleRecord>>,
    relations: Arc<RelationDataset>,
    fetch_delay: Duration,
}

impl Catalog {
    pub fn new(
        articles: Vec<ArticleRecord>,
        relations: RelationDataset,
        fetch_delay: Duration,
    ) -> Self {
        Self {
            articles: Arc::new(articles),
            relations: Arc::new(relations),
            fetch_delay,
        }
    }

    /// Catalog over the datasets compiled into the binary.
    pub fn bundled(fetch_delay: Duration) -> Result<Self, DatasetError> {
        Ok(Self::new(
            dataset::bundled_articles()?,
            dataset::bundled_relations()?,
            fetch_delay,
        ))
    }

    pub fn load(config: &CatalogConfig) -> Result<Self, DatasetError> {
        let articles = match &config.articles_path {
            Some(path) if config.dedup_articles => {
                dataset::dedup_articles(dataset::load_articles(path)?)
            }
            Some(path) => dataset::load_articles(path)?,
            None => dataset::bundled_articles()?,
        };
        let relations = match &config.relations_path {
            Some(path) => dataset::load_relations(path)?,
            None => dataset::bundled_relations()?,
        };

        info!(
            "catalog ready (articles: {}, relations: {}, delay: {:?})",
            articles.len(),
            relations.len(),
            config.fetch_delay,
        );
        if let Some(statistics) = &relations.statistics {
            info!("relation statistics: {}", statistics);
        }

        Ok(Self::new(articles, relations, config.fetch_delay))
    }

    /// Reads `CatalogConfig` from the environment and loads the datasets it
    /// names.
    pub fn from_env() -> crate::Result<Self> {
        let config = CatalogConfig::from_env()?;
        Ok(Self::load(&config)?)
    }

    /// The full article dataset, in its original order.
    ///
    /// The delay is measured from this call, not from the first poll of the
    /// returned future.
    pub fn get_articles(&self) -> impl Future<Output = Vec<ArticleRecord>> + Send + 'static {
        let deadline = Instant::now() + self.fetch_delay;
        let articles = Arc::clone(&self.articles);

        async move {
            time::sleep_until(deadline).await;
            articles.as_ref().clone()
        }
    }

    /// Related papers of the first relation entry matching `id`, or an empty
    /// list when no entry matches. Same delay semantics as `get_articles`.
    pub fn get_related_papers(
        &self,
        id: &ArticleId,
    ) -> impl Future<Output = Vec<RelatedPaper>> + Send + 'static {
        let deadline = Instant::now() + self.fetch_delay;
        let relations = Arc::clone(&self.relations);
        let id = id.clone();

        async move {
            time::sleep_until(deadline).await;
            debug!("looking up related papers for article {}", id);

            relations
                .find(&id)
                .map(|entry| entry.related.clone())
                .unwrap_or_default()
        }
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// The `statistics` block of the relation dataset, if it had one.
    pub fn relation_statistics(&self) -> Option<&Value> {
        self.relations.statistics.as_ref()
    }

    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay
    }
}
