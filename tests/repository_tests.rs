// Catalog repository queries against the seeded fixtures

mod common;

use common::db::{create_test_db, insert_all, seed_test_data};
use quake_catalog_api::analysis::{RecordFilter, aggregate::rank_regions};
use quake_catalog_api::repository::CatalogRepository;
use std::num::NonZeroU64;

#[tokio::test]
async fn test_top_by_magnitude_limit() {
    common::init();
    let db = create_test_db().await.unwrap();
    seed_test_data(&db).await.unwrap();

    let top = db
        .fetch_top_by_magnitude(NonZeroU64::new(1).unwrap())
        .await
        .unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, 3);

    let all = db
        .fetch_top_by_magnitude(NonZeroU64::new(50).unwrap())
        .await
        .unwrap();
    assert_eq!(all.len(), 6);
}

#[tokio::test]
async fn test_region_count_ties_break_by_label() {
    common::init();
    let db = create_test_db().await.unwrap();
    insert_all(
        &db,
        &[
            "INSERT INTO earthquake (date, time, latitude, longitude, depth, magnitude, remark) \
             VALUES ('2024-01-01', '00:00:00', 0, 0, 10, 3.0, 'Zulu')",
            "INSERT INTO earthquake (date, time, latitude, longitude, depth, magnitude, remark) \
             VALUES ('2024-01-02', '00:00:00', 0, 0, 10, 3.0, 'Alpha')",
        ],
    )
    .await
    .unwrap();

    let regions = db.fetch_counts_by_region().await.unwrap();
    let labels: Vec<&str> = regions.iter().map(|r| r.remark.as_str()).collect();
    assert_eq!(labels, vec!["Alpha", "Zulu"]);
}

#[tokio::test]
async fn test_sql_and_in_memory_region_counts_agree() {
    common::init();
    let db = create_test_db().await.unwrap();
    seed_test_data(&db).await.unwrap();

    let records = db.fetch_all_records().await.unwrap();
    let in_memory = rank_regions(&RecordFilter::default().apply(&records), None);
    let from_sql = db.fetch_counts_by_region().await.unwrap();
    assert_eq!(in_memory, from_sql);
}

#[tokio::test]
async fn test_range_queries_on_empty_catalog() {
    common::init();
    let db = create_test_db().await.unwrap();

    assert!(db.fetch_by_magnitude_range(0.0, 10.0).await.unwrap().is_empty());
    assert!(db.fetch_by_depth_range(0, 700).await.unwrap().is_empty());
    assert!(db.fetch_monthly_statistics().await.unwrap().is_empty());
    assert!(db.fetch_counts_by_region().await.unwrap().is_empty());
}
