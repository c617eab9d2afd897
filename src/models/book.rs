use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub first_publish_year: Option<i32>,
    pub cover_i: Option<i64>,
}

impl Book {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            author_name: Vec::new(),
            first_publish_year: None,
            cover_i: None,
        }
    }
}

/// One page of catalog results, as returned by `search.json`.
///
/// `start + docs.len() <= num_found` is what the catalog promises, but nothing
/// here relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultPage {
    #[serde(rename = "numFound", alias = "num_found")]
    pub num_found: u64,
    pub start: u64,
    #[serde(default)]
    pub docs: Vec<Book>,
}

impl SearchResultPage {
    /// Whether the catalog holds results past the end of this page.
    pub fn has_more(&self) -> bool {
        self.start.saturating_add(self.docs.len() as u64) < self.num_found
    }
}
