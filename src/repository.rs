//! Read-only queries against the earthquake catalog.
//!
//! Every query shape the dashboard needs is one method on
//! [`CatalogRepository`]. The trait is implemented for any sea-orm
//! connection, so handlers pass the pooled `DatabaseConnection` and the
//! importer can run the same queries inside its transaction.

use crate::routes::earthquakes::db::{Column, Entity as EarthquakeEntity};
use crate::routes::earthquakes::models::{Earthquake, RegionCount};
use crate::routes::statistics::db::{
    Column as MonthlyColumn, Entity as MonthlyStatisticEntity,
};
use crate::routes::statistics::models::MonthlyStatistic;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::num::NonZeroU64;
use tracing::debug;

#[async_trait]
pub trait CatalogRepository {
    /// All records, newest first.
    async fn fetch_all_records(&self) -> Result<Vec<Earthquake>, DbErr>;

    /// Monthly aggregates, newest month first.
    async fn fetch_monthly_statistics(&self) -> Result<Vec<MonthlyStatistic>, DbErr>;

    /// The `n` strongest records. Equal magnitudes are ordered by id.
    async fn fetch_top_by_magnitude(&self, n: NonZeroU64) -> Result<Vec<Earthquake>, DbErr>;

    /// Event count per exact region label, most active first. Equal counts
    /// are ordered by label.
    async fn fetch_counts_by_region(&self) -> Result<Vec<RegionCount>, DbErr>;

    /// Records with `min <= magnitude <= max`, strongest first. A reversed
    /// range matches nothing.
    async fn fetch_by_magnitude_range(&self, min: f64, max: f64)
    -> Result<Vec<Earthquake>, DbErr>;

    /// Records with `min <= depth <= max`, deepest first. A reversed range
    /// matches nothing.
    async fn fetch_by_depth_range(&self, min: i32, max: i32) -> Result<Vec<Earthquake>, DbErr>;
}

#[async_trait]
impl<C> CatalogRepository for C
where
    C: ConnectionTrait + Send + Sync,
{
    async fn fetch_all_records(&self) -> Result<Vec<Earthquake>, DbErr> {
        let models = EarthquakeEntity::find()
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Time)
            .all(self)
            .await?;
        debug!(rows = models.len(), "Fetched all earthquake records");
        Ok(models.into_iter().map(Earthquake::from).collect())
    }

    async fn fetch_monthly_statistics(&self) -> Result<Vec<MonthlyStatistic>, DbErr> {
        let models = MonthlyStatisticEntity::find()
            .order_by_desc(MonthlyColumn::Month)
            .all(self)
            .await?;
        Ok(models.into_iter().map(MonthlyStatistic::from).collect())
    }

    async fn fetch_top_by_magnitude(&self, n: NonZeroU64) -> Result<Vec<Earthquake>, DbErr> {
        let models = EarthquakeEntity::find()
            .order_by_desc(Column::Magnitude)
            .order_by_asc(Column::Id)
            .limit(n.get())
            .all(self)
            .await?;
        Ok(models.into_iter().map(Earthquake::from).collect())
    }

    async fn fetch_counts_by_region(&self) -> Result<Vec<RegionCount>, DbErr> {
        EarthquakeEntity::find()
            .select_only()
            .column(Column::Remark)
            .column_as(Column::Id.count(), "event_count")
            .group_by(Column::Remark)
            .order_by_desc(Column::Id.count())
            .order_by_asc(Column::Remark)
            .into_model::<RegionCount>()
            .all(self)
            .await
    }

    async fn fetch_by_magnitude_range(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<Earthquake>, DbErr> {
        let models = EarthquakeEntity::find()
            .filter(Column::Magnitude.between(min, max))
            .order_by_desc(Column::Magnitude)
            .order_by_asc(Column::Id)
            .all(self)
            .await?;
        Ok(models.into_iter().map(Earthquake::from).collect())
    }

    async fn fetch_by_depth_range(&self, min: i32, max: i32) -> Result<Vec<Earthquake>, DbErr> {
        let models = EarthquakeEntity::find()
            .filter(Column::Depth.between(min, max))
            .order_by_desc(Column::Depth)
            .order_by_asc(Column::Id)
            .all(self)
            .await?;
        Ok(models.into_iter().map(Earthquake::from).collect())
    }
}
