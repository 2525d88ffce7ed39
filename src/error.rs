use thiserror::Error;

use crate::{catalog::error::ConfigError, dataset::error::DatasetError};

#[derive(Debug, Error)]
pub enum ArticleRelationsError {
    #[error("Error reading configuration from environment")]
    Config(#[from] ConfigError),

    #[error("Error loading datasets")]
    Dataset(#[from] DatasetError),
}

pub type Result<T> = std::result::Result<T, ArticleRelationsError>;
