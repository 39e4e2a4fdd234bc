//! Book and author records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of one or more books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// Author data for insertion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAuthor {
    pub name: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub stock: i32,
    pub discount: bool,
    pub author_id: Option<i32>,
    /// Populated only when the author was written in the same call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book data for insertion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub category: String,
    pub stock: i32,
    pub author: Option<NewAuthor>,
}

impl NewBook {
    /// Create a new book with no stock and no author
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            stock: 0,
            author: None,
        }
    }

    /// Attach an author to be inserted alongside the book
    pub fn with_author(mut self, author: NewAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }
}

/// Title and category projection of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub title: String,
    pub category: String,
}
