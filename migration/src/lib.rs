pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_earthquake;
mod m20250101_000002_create_monthly_statistics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_earthquake::Migration),
            Box::new(m20250101_000002_create_monthly_statistics::Migration),
        ]
    }
}
