pub use sea_orm_migration::prelude::*;
pub use sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20260815_000001_create_status_tables; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20260815_000001_create_status_tables::Migration,
        )]
    }
}

/// Upgrade the connected database to the schema version pinned by the
/// compiled-in migration list. The migration bookkeeping table is created
/// on first run, so this also works against a brand-new database.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    let defined = Migrator::migrations().len();
    let applied_before = count_applied_migrations(db).await?;

    tracing::info!(
        "▶ migrate=start defined={defined} applied={applied_before}"
    );

    match Migrator::up(db, None).await {
        Ok(()) => {
            let applied_after = count_applied_migrations(db).await?;
            let latest = latest_applied_migration(db).await?;
            tracing::info!(
                "✅ migrate=done applied={applied_after} latest={}",
                latest.as_deref().unwrap_or("<none>")
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ migrate=failed err={e}");
            Err(e)
        }
    }
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0), // Migration table doesn't exist yet
        Err(e) => Err(e),
    }
}

/// Get the version string of the latest applied migration.
/// Returns None if no migrations have been applied or the migration table doesn't exist.
pub async fn latest_applied_migration(db: &DatabaseConnection) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
