use crate::models::book::Book;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Live state of one search lifecycle. Only the controller mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSession {
    pub(crate) query: String,
    pub(crate) page: u32,
    pub(crate) books: Vec<Book>,
    pub(crate) total_results: u64,
    pub(crate) has_more: bool,
    pub(crate) status: SearchStatus,
    pub(crate) last_error: Option<String>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            books: Vec::new(),
            total_results: 0,
            has_more: false,
            status: SearchStatus::Idle,
            last_error: None,
        }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last submitted query, empty when nothing has been searched yet.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn has_searched(&self) -> bool {
        !self.query.is_empty()
    }
}
