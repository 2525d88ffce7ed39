use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::error::ConfigError;

pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(100);

const ARTICLES_PATH: &str = "ARTICLES_PATH";
const RELATIONS_PATH: &str = "RELATIONS_PATH";
const FETCH_DELAY_MS: &str = "FETCH_DELAY_MS";
const DEDUP_ARTICLES: &str = "DEDUP_ARTICLES";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Article dataset file; the bundled sample when unset.
    pub articles_path: Option<PathBuf>,
    /// Relation dataset file; the bundled sample when unset.
    pub relations_path: Option<PathBuf>,
    pub fetch_delay: Duration,
    /// Collapse duplicate titles in a file-loaded article dataset.
    pub dedup_articles: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            articles_path: None,
            relations_path: None,
            fetch_delay: DEFAULT_FETCH_DELAY,
            dedup_articles: false,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch_delay = match lookup(FETCH_DELAY_MS) {
            Some(value) => {
                let millis = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidDelay {
                        var: FETCH_DELAY_MS,
                        value: value.clone(),
                        source,
                    })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_FETCH_DELAY,
        };

        let dedup_articles = match lookup(DEDUP_ARTICLES) {
            Some(value) => parse_flag(DEDUP_ARTICLES, &value)?,
            None => false,
        };

        Ok(Self {
            articles_path: lookup(ARTICLES_PATH).map(PathBuf::from),
            relations_path: lookup(RELATIONS_PATH).map(PathBuf::from),
            fetch_delay,
            dedup_articles,
        })
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.fetch_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("ARTICLES_PATH", "/srv/HackerNews_top500.json"),
            ("RELATIONS_PATH", "/srv/document_relations.json"),
            ("FETCH_DELAY_MS", " 250 "),
            ("DEDUP_ARTICLES", "True"),
        ]))
        .unwrap();

        assert_eq!(
            config.articles_path,
            Some(PathBuf::from("/srv/HackerNews_top500.json"))
        );
        assert_eq!(
            config.relations_path,
            Some(PathBuf::from("/srv/document_relations.json"))
        );
        assert_eq!(config.fetch_delay, Duration::from_millis(250));
        assert!(config.dedup_articles);
    }

    #[test]
    fn test_dedup_flag_values() {
        for off in ["0", "false", "", "OFF"] {
            let config = CatalogConfig::from_lookup(lookup(&[("DEDUP_ARTICLES", off)])).unwrap();
            assert!(!config.dedup_articles, "{off:?} should disable dedup");
        }

        let err = CatalogConfig::from_lookup(lookup(&[("DEDUP_ARTICLES", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { var: "DEDUP_ARTICLES", .. }));
    }

    #[test]
    fn test_invalid_delay() {
        let err =
            CatalogConfig::from_lookup(lookup(&[("FETCH_DELAY_MS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelay { ref value, .. } if value == "soon"));
    }
}
