//! Repository layer for data access.

mod book_repository;
pub mod entities;

pub use book_repository::{BookRepository, BookStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use book_repository::MockBookRepository;
