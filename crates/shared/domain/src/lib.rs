//! Domain layer - Catalog records shared across the workspace.
//!
//! These are plain data records with no infrastructure dependencies.
//! Database entities convert into them at the repository boundary.

pub mod book;
pub mod constants;

pub use book::{Author, Book, BookSummary, NewAuthor, NewBook};
pub use constants::*;
