//! CRUD wrapper tests against the sea-orm backed store.
//!
//! These run the real `BookStore` on top of sea-orm's `MockDatabase`,
//! so the statements the wrappers build are executed end to end.

use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Transaction};

use common::AppError;
use domain::{NewAuthor, NewBook, CATEGORY_EDUCATION};
use library_service_lib::repository::entities::{author, book};
use library_service_lib::repository::BookStore;
use library_service_lib::service::{
    crud_delete_all, crud_delete_any, crud_find, crud_find_alias, crud_find_all, crud_insert,
    crud_update_any,
};

fn book_model(id: i32, title: &str) -> book::Model {
    book::Model {
        id,
        title: title.to_string(),
        category: CATEGORY_EDUCATION.to_string(),
        stock: 10,
        discount: false,
        author_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_crud_insert_with_author() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![author::Model {
            id: 1,
            name: "CZ2I28 Delta".to_string(),
        }]])
        .append_query_results([vec![book::Model {
            author_id: Some(1),
            ..book_model(1, "Rel for dummies")
        }]])
        .into_connection();
    let store = BookStore::new(db);

    let book = NewBook::new("Rel for dummies", CATEGORY_EDUCATION)
        .with_author(NewAuthor::new("CZ2I28 Delta"));
    let stored = crud_insert(&store, book).await.unwrap();

    assert_eq!(stored.author.map(|a| a.name), Some("CZ2I28 Delta".to_string()));
}

#[tokio::test]
async fn test_crud_insert_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("oops".to_string())])
        .into_connection();
    let store = BookStore::new(db);

    let result = crud_insert(&store, NewBook::new("Rel for dummies", CATEGORY_EDUCATION)).await;

    assert!(matches!(
        result,
        Err(AppError::Database(DbErr::Custom(ref msg))) if msg == "oops"
    ));
}

#[tokio::test]
async fn test_crud_find() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![book_model(1, "Rel for dummies")]])
        .into_connection();
    let store = BookStore::new(db);

    let found = crud_find(&store, 1).await.unwrap();

    assert_eq!(found.title, "Rel for dummies");
    assert_eq!(store.into_connection().into_transaction_log().len(), 1);
}

#[tokio::test]
async fn test_crud_find_alias_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<book::Model>::new()])
        .into_connection();
    let store = BookStore::new(db);

    let result = crud_find_alias(&store, 1).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_crud_find_all() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![book_model(1, "Rel for dummies")]])
        .into_connection();
    let store = BookStore::new(db);

    let books = crud_find_all(&store, "%dummies%", CATEGORY_EDUCATION, 10)
        .await
        .unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].category, "education");
}

#[tokio::test]
async fn test_crud_update_any() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 2,
        }])
        .into_connection();
    let store = BookStore::new(db);

    let affected = crud_update_any(&store, 100).await.unwrap();

    assert_eq!(affected, 2);
    assert_eq!(
        store.into_connection().into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE "books" SET "discount" = $1 WHERE "books"."stock" < $2"#,
            [true.into(), 100i32.into()],
        )]
    );
}

#[tokio::test]
async fn test_crud_delete_any() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let store = BookStore::new(db);

    let affected = crud_delete_any(&store, 1).await.unwrap();

    assert_eq!(affected, 1);
    assert_eq!(
        store.into_connection().into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"DELETE FROM "books" WHERE "books"."id" = $1"#,
            [1i32.into()],
        )]
    );
}

#[test]
fn test_crud_delete_all_empty_skips_database() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let store = BookStore::new(db);

    let affected = tokio_test::block_on(crud_delete_all(&store, Vec::new())).unwrap();

    assert_eq!(affected, 0);
    assert!(store.into_connection().into_transaction_log().is_empty());
}
