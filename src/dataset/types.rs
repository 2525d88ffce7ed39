use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Textual article identifier.
///
/// Relation lookups compare identifiers as text. Numeric ids must be converted
/// before calling, `ArticleId::from(42u64)` and `ArticleId::from("42")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ArticleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ArticleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ArticleId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<u32> for ArticleId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for ArticleId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// A single story as scraped from Hacker News. The record is opaque and
/// serialized back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleRecord(Value);

impl ArticleRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The conventional `id` field, if it is a number or a string.
    pub fn id(&self) -> Option<ArticleId> {
        match self.0.get("id")? {
            Value::Number(n) => Some(ArticleId::new(n.to_string())),
            Value::String(s) => Some(ArticleId::new(s.as_str())),
            _ => None,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// One related-paper item. Usually an object with `arxiv_url`, `similarity`
/// and `paper_title`, but passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelatedPaper(Value);

impl RelatedPaper {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<&str> for RelatedPaper {
    fn from(id: &str) -> Self {
        Self(Value::String(id.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEntry {
    #[serde(rename = "hackernews_id")]
    pub article_id: String,

    #[serde(
        rename = "hackernews_title",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Value>,

    #[serde(rename = "related_arxiv")]
    pub related: Vec<RelatedPaper>,
}

impl RelationEntry {
    pub fn new(article_id: impl Into<String>, related: Vec<RelatedPaper>) -> Self {
        Self {
            article_id: article_id.into(),
            title: None,
            related,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationDataset {
    #[serde(rename = "document_relations")]
    pub entries: Vec<RelationEntry>,

    /// Summary block written next to the relations, kept as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Value>,
}

impl RelationDataset {
    pub fn new(entries: Vec<RelationEntry>) -> Self {
        Self {
            entries,
            statistics: None,
        }
    }

    /// First entry whose stored id equals `id`. Later duplicates are never
    /// returned.
    pub fn find(&self, id: &ArticleId) -> Option<&RelationEntry> {
        self.entries.iter().find(|e| e.article_id == id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
