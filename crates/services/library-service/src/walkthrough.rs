//! End-to-end CRUD walkthrough.
//!
//! Runs every wrapper in order against a repository and records the
//! outcome of each step. A failed step never aborts the run; steps that
//! need a record produced by a failed step are reported as skipped.

use serde::Serialize;

use common::AppResult;
use domain::{
    NewAuthor, NewBook, CATEGORY_EDUCATION, DEFAULT_FIND_LIMIT, LOW_STOCK_THRESHOLD,
    SAMPLE_AUTHOR_NAME, SAMPLE_BOOK_TITLE, SAMPLE_BOOK_UPDATED_TITLE, SAMPLE_TITLE_PATTERN,
};

use crate::repository::BookRepository;
use crate::service::{
    crud_delete, crud_delete_all, crud_delete_any, crud_find, crud_find_alias, crud_find_all,
    crud_find_all_chained, crud_insert, crud_insert_all, crud_update, crud_update_any,
};

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Ok,
    Failed,
    Skipped,
}

/// One line of the walkthrough report.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: &'static str,
    pub status: StepStatus,
    pub detail: String,
}

#[derive(Default)]
struct Report {
    steps: Vec<StepReport>,
}

impl Report {
    fn record<T>(
        &mut self,
        step: &'static str,
        result: AppResult<T>,
        describe: impl FnOnce(&T) -> String,
    ) -> Option<T> {
        match result {
            Ok(value) => {
                let detail = describe(&value);
                tracing::info!(step, %detail, "Step succeeded");
                self.steps.push(StepReport {
                    step,
                    status: StepStatus::Ok,
                    detail,
                });
                Some(value)
            }
            Err(e) => {
                tracing::warn!(step, code = e.code(), "Step failed: {}", e);
                self.steps.push(StepReport {
                    step,
                    status: StepStatus::Failed,
                    detail: format!("{}: {}", e.code(), e.user_message()),
                });
                None
            }
        }
    }

    fn skip(&mut self, step: &'static str, reason: &str) {
        tracing::info!(step, reason, "Step skipped");
        self.steps.push(StepReport {
            step,
            status: StepStatus::Skipped,
            detail: reason.to_string(),
        });
    }
}

/// Books inserted in bulk by the `insert_all` step.
fn batch() -> Vec<NewBook> {
    vec![
        NewBook::new("Rel for experts", CATEGORY_EDUCATION).with_stock(40),
        NewBook::new("Go for dummies", CATEGORY_EDUCATION).with_stock(250),
    ]
}

/// Run the walkthrough and return one report entry per step.
pub async fn run(repo: &dyn BookRepository) -> Vec<StepReport> {
    let mut report = Report::default();

    let sample = NewBook::new(SAMPLE_BOOK_TITLE, CATEGORY_EDUCATION)
        .with_author(NewAuthor::new(SAMPLE_AUTHOR_NAME));
    let inserted = report.record("insert", crud_insert(repo, sample).await, |b| {
        format!("inserted book {} ({:?})", b.id, b.title)
    });

    let inserted_batch = report.record("insert_all", crud_insert_all(repo, batch()).await, |b| {
        format!("inserted {} books", b.len())
    });

    match &inserted {
        Some(book) => {
            report.record("find", crud_find(repo, book.id).await, |b| {
                format!("found book {}", b.id)
            });
            report.record("find_alias", crud_find_alias(repo, book.id).await, |b| {
                format!("found book {}", b.id)
            });
        }
        None => {
            report.skip("find", "insert failed");
            report.skip("find_alias", "insert failed");
        }
    }

    report.record(
        "find_all",
        crud_find_all(repo, SAMPLE_TITLE_PATTERN, CATEGORY_EDUCATION, DEFAULT_FIND_LIMIT).await,
        |books| format!("matched {} books", books.len()),
    );

    report.record(
        "find_all_chained",
        crud_find_all_chained(repo, CATEGORY_EDUCATION).await,
        |summaries| {
            let titles: Vec<&str> = summaries.iter().map(|s| s.title.as_str()).collect();
            format!("titles {:?}", titles)
        },
    );

    let updated = match inserted {
        Some(book) => report.record(
            "update",
            crud_update(repo, book, SAMPLE_BOOK_UPDATED_TITLE).await,
            |b| format!("renamed book {} to {:?}", b.id, b.title),
        ),
        None => {
            report.skip("update", "insert failed");
            None
        }
    };

    report.record(
        "update_any",
        crud_update_any(repo, LOW_STOCK_THRESHOLD).await,
        |rows| format!("discounted {} books", rows),
    );

    match updated {
        Some(book) => {
            let id = book.id;
            report.record("delete", crud_delete(repo, book).await, |_| {
                format!("deleted book {}", id)
            });
        }
        None => report.skip("delete", "update failed"),
    }

    // The last batch row is kept back so the bulk delete by id has a live target.
    let kept_id = match inserted_batch {
        Some(mut books) => {
            let kept = books.pop().map(|b| b.id);
            report.record("delete_all", crud_delete_all(repo, books).await, |rows| {
                format!("deleted {} books", rows)
            });
            kept
        }
        None => {
            report.skip("delete_all", "insert_all failed");
            None
        }
    };

    match kept_id {
        Some(id) => {
            report.record("delete_any", crud_delete_any(repo, id).await, |rows| {
                format!("deleted {} books", rows)
            });
        }
        None => report.skip("delete_any", "insert_all produced no rows"),
    }

    report.steps
}
