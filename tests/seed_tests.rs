//! Integration tests for the migration seed: repeat-safe upsert by id.

mod common;

use crate::common::TestHarness;
use products_api::seed::BASELINE_PRODUCTS;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn seed_inserts_baseline_rows(ctx: &TestHarness) {
    ctx.seed().await.unwrap();

    let products = ctx.store.list().await.unwrap();
    assert_eq!(products.len(), BASELINE_PRODUCTS.len());
    // list() orders by name, not id.
    let names: Vec<&str> = products.iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(names, ["Aniseed Syrup", "Chai", "Chang"]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn seed_twice_creates_no_duplicates(ctx: &TestHarness) {
    ctx.seed().await.unwrap();
    ctx.seed().await.unwrap();

    let products = ctx.store.list().await.unwrap();
    assert_eq!(products.len(), BASELINE_PRODUCTS.len());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn seed_repairs_drifted_rows(ctx: &TestHarness) {
    ctx.seed().await.unwrap();

    sqlx::query("UPDATE products SET product_name = 'Renamed', unit_price = 99 WHERE id = 1")
        .execute(&ctx.db_pool)
        .await
        .unwrap();

    ctx.seed().await.unwrap();

    let chai = ctx.store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(chai.product_name, "Chai");
    assert_eq!(chai.unit_price, 10.0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn seed_leaves_other_rows_alone(ctx: &TestHarness) {
    ctx.seed().await.unwrap();

    let extra = products_api::Product {
        id: 50,
        product_name: "Extra".into(),
        unit_price: 5.0,
    };
    ctx.store.insert(&extra).await.unwrap();

    ctx.seed().await.unwrap();

    assert_eq!(ctx.store.find_by_id(50).await.unwrap(), Some(extra));
    assert_eq!(ctx.store.list().await.unwrap().len(), BASELINE_PRODUCTS.len() + 1);
}
