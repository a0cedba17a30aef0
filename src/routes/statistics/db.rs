use sea_orm::entity::prelude::*;

// Backed by the `monthly_statistics` view; rows are never written from here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "monthly_statistics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub month: chrono::NaiveDate,
    pub event_count: i64,
    #[sea_orm(column_type = "Double")]
    pub mean_magnitude: f64,
    #[sea_orm(column_type = "Double")]
    pub max_magnitude: f64,
    #[sea_orm(column_type = "Double")]
    pub min_magnitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
