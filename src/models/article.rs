//! Article summary model for the explore feed

use serde::{Deserialize, Serialize};

/// One paper/article entry as shown on a feed card.
///
/// Immutable once built; identifiers are unique within any list handed to
/// the UI. Wire names are camelCase to match the backend's JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub read_time: String,
}

impl Article {
    /// Creates a new article with minimal required fields
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: String::new(),
            date: String::new(),
            summary: String::new(),
            tags: Vec::new(),
            read_time: String::new(),
        }
    }

    /// Builder pattern: set author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Builder pattern: set publication date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Builder pattern: set summary text
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Builder pattern: set tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder pattern: set estimated read time
    pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = read_time.into();
        self
    }
}
