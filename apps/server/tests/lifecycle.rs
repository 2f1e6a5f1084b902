use egon_server::{AppConfig, Application};
use migration::{count_applied_migrations, latest_applied_migration, Migrator, MigratorTrait};
use sea_orm::Database;
use tempfile::TempDir;

fn file_db(dir: &TempDir) -> (AppConfig, String) {
    let path = dir.path().join("egon.db");
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let config = AppConfig::new(url.clone()).expect("valid config");
    (config, url)
}

#[tokio::test]
async fn migrate_db_applies_every_pinned_migration() {
    let dir = TempDir::new().unwrap();
    let (config, url) = file_db(&dir);

    Application::new(config)
        .migrate_db()
        .await
        .expect("migration succeeds on a fresh database");

    let db = Database::connect(&url).await.expect("connect");
    let applied = count_applied_migrations(&db).await.expect("count");
    assert_eq!(applied, Migrator::migrations().len());

    let latest = latest_applied_migration(&db).await.expect("latest");
    let expected = Migrator::migrations().last().map(|m| m.name().to_string());
    assert_eq!(latest, expected);
}

#[tokio::test]
async fn latest_applied_migration_is_none_on_fresh_database() {
    let db = Database::connect("sqlite::memory:").await.expect("connect");
    let latest = latest_applied_migration(&db).await.expect("latest");
    assert_eq!(latest, None);
}

#[tokio::test]
async fn migrate_db_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let (config, url) = file_db(&dir);
    let app = Application::new(config);

    app.migrate_db().await.expect("first run");
    app.migrate_db().await.expect("second run is a no-op");

    let db = Database::connect(&url).await.expect("connect");
    let applied = count_applied_migrations(&db).await.expect("count");
    assert_eq!(applied, Migrator::migrations().len());
}

#[tokio::test]
async fn migrate_db_creates_the_database_file() {
    let dir = TempDir::new().unwrap();
    let (config, _) = file_db(&dir);

    assert!(!dir.path().join("egon.db").exists());
    Application::new(config).migrate_db().await.expect("migrate");
    assert!(dir.path().join("egon.db").exists());
}

#[actix_web::test]
async fn start_api_migrates_before_serving() {
    let dir = TempDir::new().unwrap();
    let (config, url) = file_db(&dir);

    // Port 0 lets the OS pick a free port; the server is never awaited, so
    // nothing serves, but by the time the handle exists the schema must
    // already be fully applied.
    let server = Application::new(config)
        .start_api("127.0.0.1", 0)
        .await
        .expect("start api");

    let db = Database::connect(&url).await.expect("connect");
    let applied = count_applied_migrations(&db).await.expect("count");
    assert_eq!(
        applied,
        Migrator::migrations().len(),
        "listener must not exist before the schema is migrated"
    );

    drop(server);
}

#[tokio::test]
async fn migrate_db_fails_on_unreachable_database() {
    let dir = TempDir::new().unwrap();
    // mode=ro refuses to create the missing file, so the connect fails and
    // the failure propagates instead of being retried.
    let url = format!("sqlite://{}/missing.db?mode=ro", dir.path().display());
    let config = AppConfig::new(url).expect("config");

    let result = Application::new(config).migrate_db().await;
    assert!(result.is_err());
}
