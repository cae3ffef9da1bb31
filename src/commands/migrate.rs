//! Migrate command - Applies, reverts or lists catalog schema migrations.

use sea_orm::DbErr;
use sea_orm_migration::MigratorTrait;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Migrator};

fn migration_failed(e: DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", e))
}

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::open(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let conn = db.connection();

    match args.action {
        MigrateAction::Up => {
            Migrator::up(conn, None).await.map_err(migration_failed)?;
            tracing::info!("Pending migrations applied");
        }
        MigrateAction::Down => {
            Migrator::down(conn, Some(1)).await.map_err(migration_failed)?;
            tracing::info!("Last migration reverted");
        }
        MigrateAction::Status => {
            let states = db.migration_states().await.map_err(migration_failed)?;
            for state in &states {
                println!(
                    "{:<48} {}",
                    state.name,
                    if state.applied { "applied" } else { "pending" }
                );
            }
            let pending = states.iter().filter(|s| !s.applied).count();
            tracing::info!(known = states.len(), pending, "Migration status");
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping the company and product tables");
            Migrator::fresh(conn).await.map_err(migration_failed)?;
            tracing::info!("Schema rebuilt from scratch");
        }
    }

    Ok(())
}
