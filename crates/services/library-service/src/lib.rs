//! Library Service Library
//!
//! CRUD wrappers over a sea-orm backed book repository, the repository
//! itself, and the schema it runs against.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;
pub mod walkthrough;

use tracing::info;

use crate::config::LibraryServiceConfig;
use crate::infra::Database;
use crate::repository::BookStore;
use crate::walkthrough::StepStatus;

/// Run the CRUD walkthrough against the configured database and print a JSON report.
pub async fn run_walkthrough(config: LibraryServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    db.ping().await?;

    let store = BookStore::new(db.into_connection());
    let steps = walkthrough::run(&store).await;

    let failed = steps.iter().filter(|s| s.status == StepStatus::Failed).count();
    info!(steps = steps.len(), failed, "Walkthrough finished");

    println!("{}", serde_json::to_string_pretty(&steps)?);
    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: LibraryServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
