//! CRUD wrappers.
//!
//! Each wrapper builds one sea-orm query (or record) and hands it to the
//! repository. Errors are returned exactly as the repository produced them.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use common::AppResult;
use domain::{Book, BookSummary, NewBook};

use crate::repository::entities::book::{self, Entity as BookEntity};
use crate::repository::BookRepository;

/// Insert a single book, with its author when one is attached.
pub async fn crud_insert(repo: &dyn BookRepository, book: NewBook) -> AppResult<Book> {
    tracing::debug!(title = %book.title, "crud_insert");
    repo.insert(book).await
}

/// Insert several books at once.
pub async fn crud_insert_all(repo: &dyn BookRepository, books: Vec<NewBook>) -> AppResult<Vec<Book>> {
    tracing::debug!(count = books.len(), "crud_insert_all");
    repo.insert_all(books).await
}

/// Find a book by id using a column filter.
pub async fn crud_find(repo: &dyn BookRepository, id: i32) -> AppResult<Book> {
    tracing::debug!(id, "crud_find");
    let query = BookEntity::find().filter(book::Column::Id.eq(id));
    repo.find(query).await
}

/// Find a book by id using a condition tree.
///
/// Produces the same statement as [`crud_find`].
pub async fn crud_find_alias(repo: &dyn BookRepository, id: i32) -> AppResult<Book> {
    tracing::debug!(id, "crud_find_alias");
    let query = BookEntity::find().filter(Condition::all().add(book::Column::Id.eq(id)));
    repo.find(query).await
}

/// Find books whose title matches `title_pattern` within a category.
pub async fn crud_find_all(
    repo: &dyn BookRepository,
    title_pattern: &str,
    category: &str,
    limit: u64,
) -> AppResult<Vec<Book>> {
    tracing::debug!(title_pattern, category, limit, "crud_find_all");
    let query = BookEntity::find()
        .filter(
            Condition::all()
                .add(book::Column::Title.like(title_pattern))
                .add(book::Column::Category.eq(category)),
        )
        .limit(limit);
    repo.find_all(query).await
}

/// List title and category of every book in a category, sorted by title.
pub async fn crud_find_all_chained(
    repo: &dyn BookRepository,
    category: &str,
) -> AppResult<Vec<BookSummary>> {
    tracing::debug!(category, "crud_find_all_chained");
    let query = BookEntity::find()
        .select_only()
        .columns([book::Column::Title, book::Column::Category])
        .filter(book::Column::Category.eq(category))
        .order_by_asc(book::Column::Title);
    repo.find_summaries(query).await
}

/// Rename a stored book.
pub async fn crud_update(repo: &dyn BookRepository, mut book: Book, title: &str) -> AppResult<Book> {
    tracing::debug!(id = book.id, title, "crud_update");
    book.title = title.to_string();
    repo.update(book).await
}

/// Flag every book with stock below `stock_below` as discounted.
pub async fn crud_update_any(repo: &dyn BookRepository, stock_below: i32) -> AppResult<u64> {
    tracing::debug!(stock_below, "crud_update_any");
    let query = BookEntity::update_many()
        .col_expr(book::Column::Discount, Expr::value(true))
        .filter(book::Column::Stock.lt(stock_below));
    repo.update_any(query).await
}

pub async fn crud_delete(repo: &dyn BookRepository, book: Book) -> AppResult<()> {
    tracing::debug!(id = book.id, "crud_delete");
    repo.delete(book).await
}

pub async fn crud_delete_all(repo: &dyn BookRepository, books: Vec<Book>) -> AppResult<u64> {
    tracing::debug!(count = books.len(), "crud_delete_all");
    repo.delete_all(books).await
}

/// Delete by id with a bulk delete statement.
pub async fn crud_delete_any(repo: &dyn BookRepository, id: i32) -> AppResult<u64> {
    tracing::debug!(id, "crud_delete_any");
    let query = BookEntity::delete_many().filter(book::Column::Id.eq(id));
    repo.delete_any(query).await
}
