use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Error reading dataset file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {dataset} dataset")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
