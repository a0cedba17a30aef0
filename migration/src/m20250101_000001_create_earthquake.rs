use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Earthquake::Table)
                    .if_not_exists()
                    .col(pk_auto(Earthquake::Id))
                    .col(date(Earthquake::Date))
                    .col(time(Earthquake::Time))
                    .col(double(Earthquake::Latitude))
                    .col(double(Earthquake::Longitude))
                    .col(integer(Earthquake::Depth))
                    .col(double(Earthquake::Magnitude))
                    .col(text(Earthquake::Remark))
                    .to_owned(),
            )
            .await?;

        // Every dashboard query sorts or filters on one of these
        for (name, column) in [
            ("idx_earthquake_date", Earthquake::Date),
            ("idx_earthquake_magnitude", Earthquake::Magnitude),
            ("idx_earthquake_depth", Earthquake::Depth),
            ("idx_earthquake_remark", Earthquake::Remark),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Earthquake::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Earthquake::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Earthquake {
    Table,
    Id,
    Date,
    Time,
    Latitude,
    Longitude,
    Depth,
    Magnitude,
    Remark,
}
