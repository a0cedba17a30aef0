// Database test utilities

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};

/// Fresh in-memory SQLite database with the schema applied. Every call
/// returns an isolated database.
pub async fn create_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None)
        .await
        .map_err(|e| DbErr::Custom(format!("Migration failed: {}", e)))?;

    Ok(db)
}

/// Seed the database with the catalog fixtures
pub async fn seed_test_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    insert_all(db, super::fixtures::EARTHQUAKE_FIXTURES).await
}

pub async fn insert_all(db: &DatabaseConnection, statements: &[&str]) -> Result<(), DbErr> {
    for sql in statements {
        db.execute(sea_orm::Statement::from_string(
            db.get_database_backend(),
            sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}
