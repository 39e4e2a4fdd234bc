//! Book repository implementation.
//!
//! The trait takes sea-orm query builders as arguments, so callers decide
//! *what* to fetch or change while the store decides *how* it is executed.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, DeleteMany,
    EntityTrait, QueryFilter, Select, Set, TransactionTrait, Unchanged, UpdateMany,
};

use super::entities::author;
use super::entities::book::{self, Entity as BookEntity, SummaryRow};
use common::{AppError, AppResult, OptionExt};
use domain::{Author, Book, BookSummary, NewBook};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Book repository trait for dependency injection.
///
/// Lookups that expect a single record return [`AppError::NotFound`]
/// when nothing matches; every other error is the driver's, unchanged.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book, together with its author when one is attached
    async fn insert(&self, book: NewBook) -> AppResult<Book>;

    /// Insert several books in a single transaction
    async fn insert_all(&self, books: Vec<NewBook>) -> AppResult<Vec<Book>>;

    /// First book matching the query
    async fn find(&self, query: Select<BookEntity>) -> AppResult<Book>;

    /// All books matching the query
    async fn find_all(&self, query: Select<BookEntity>) -> AppResult<Vec<Book>>;

    /// Rows of a title/category projection
    async fn find_summaries(&self, query: Select<BookEntity>) -> AppResult<Vec<BookSummary>>;

    /// Write every mutable column of an existing book
    async fn update(&self, book: Book) -> AppResult<Book>;

    /// Bulk update, returns rows affected
    async fn update_any(&self, query: UpdateMany<BookEntity>) -> AppResult<u64>;

    /// Delete a book by primary key
    async fn delete(&self, book: Book) -> AppResult<()>;

    /// Delete the given books by primary key, returns rows affected
    async fn delete_all(&self, books: Vec<Book>) -> AppResult<u64>;

    /// Bulk delete, returns rows affected
    async fn delete_any(&self, query: DeleteMany<BookEntity>) -> AppResult<u64>;
}

/// Concrete implementation of BookRepository
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Release the underlying connection
    pub fn into_connection(self) -> DatabaseConnection {
        self.db
    }
}

/// Insert the author (if any) and then the book on the same connection.
async fn insert_with_author<C>(conn: &C, book: NewBook) -> Result<Book, DbErr>
where
    C: ConnectionTrait,
{
    let author = match book.author {
        Some(new_author) => {
            let active = author::ActiveModel {
                name: Set(new_author.name),
                ..Default::default()
            };
            Some(active.insert(conn).await?)
        }
        None => None,
    };

    let now = chrono::Utc::now();
    let active = book::ActiveModel {
        title: Set(book.title),
        category: Set(book.category),
        stock: Set(book.stock),
        discount: Set(false),
        author_id: Set(author.as_ref().map(|a| a.id)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let model = active.insert(conn).await?;

    let mut stored = Book::from(model);
    stored.author = author.map(Author::from);
    Ok(stored)
}

#[async_trait]
impl BookRepository for BookStore {
    async fn insert(&self, book: NewBook) -> AppResult<Book> {
        let txn = self.db.begin().await?;
        let stored = insert_with_author(&txn, book).await?;
        txn.commit().await?;

        tracing::debug!(id = stored.id, "Inserted book");
        Ok(stored)
    }

    async fn insert_all(&self, books: Vec<NewBook>) -> AppResult<Vec<Book>> {
        if books.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await?;
        let mut stored = Vec::with_capacity(books.len());
        for book in books {
            stored.push(insert_with_author(&txn, book).await?);
        }
        txn.commit().await?;

        tracing::debug!(count = stored.len(), "Inserted books");
        Ok(stored)
    }

    async fn find(&self, query: Select<BookEntity>) -> AppResult<Book> {
        query
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(Book::from)
            .ok_or_not_found()
    }

    async fn find_all(&self, query: Select<BookEntity>) -> AppResult<Vec<Book>> {
        let models = query.all(&self.db).await.map_err(AppError::from)?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    async fn find_summaries(&self, query: Select<BookEntity>) -> AppResult<Vec<BookSummary>> {
        let rows = query
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(BookSummary::from).collect())
    }

    async fn update(&self, book: Book) -> AppResult<Book> {
        let author = book.author.clone();
        let active = book::ActiveModel {
            id: Unchanged(book.id),
            title: Set(book.title),
            category: Set(book.category),
            stock: Set(book.stock),
            discount: Set(book.discount),
            author_id: Set(book.author_id),
            created_at: Unchanged(book.created_at),
            updated_at: Set(chrono::Utc::now()),
        };

        let model = match active.update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(AppError::NotFound),
            Err(e) => return Err(e.into()),
        };

        let mut stored = Book::from(model);
        stored.author = author;
        Ok(stored)
    }

    async fn update_any(&self, query: UpdateMany<BookEntity>) -> AppResult<u64> {
        let result = query.exec(&self.db).await.map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, book: Book) -> AppResult<()> {
        let result = BookEntity::delete_by_id(book.id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete_all(&self, books: Vec<Book>) -> AppResult<u64> {
        if books.is_empty() {
            return Ok(0);
        }

        let ids: Vec<i32> = books.iter().map(|b| b.id).collect();
        let result = BookEntity::delete_many()
            .filter(book::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn delete_any(&self, query: DeleteMany<BookEntity>) -> AppResult<u64> {
        let result = query.exec(&self.db).await.map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
