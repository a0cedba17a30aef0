use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The month key has no portable expression, so the view is written per backend
        let month_expr = match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => "CAST(date_trunc('month', \"date\") AS DATE)",
            sea_orm::DatabaseBackend::Sqlite => "strftime('%Y-%m-01', \"date\")",
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        };

        let sql = format!(
            "CREATE VIEW monthly_statistics AS \
             SELECT {month_expr} AS month, \
                    COUNT(*) AS event_count, \
                    AVG(magnitude) AS mean_magnitude, \
                    MAX(magnitude) AS max_magnitude, \
                    MIN(magnitude) AS min_magnitude \
             FROM earthquake \
             GROUP BY {month_expr}"
        );

        manager.get_connection().execute_unprepared(&sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS monthly_statistics")
            .await?;
        Ok(())
    }
}
