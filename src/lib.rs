pub mod catalog;
pub mod dataset;
pub mod error;
pub mod http;

pub use catalog::Catalog;
pub use dataset::{ArticleId, ArticleRecord, RelatedPaper};
pub use error::{ArticleRelationsError, Result};
