//! Baseline catalog rows, applied once per migration cycle. Upsert by id, so
//! re-running never duplicates rows or lets them drift.

use crate::error::AppError;
use sqlx::PgPool;

pub const BASELINE_PRODUCTS: &[(i32, &str, f64)] = &[
    (1, "Chai", 10.0),
    (2, "Chang", 11.0),
    (3, "Aniseed Syrup", 12.0),
];

pub async fn seed_products(pool: &PgPool) -> Result<(), AppError> {
    for &(id, name, price) in BASELINE_PRODUCTS {
        sqlx::query(
            "INSERT INTO products (id, product_name, unit_price) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE \
             SET product_name = EXCLUDED.product_name, \
                 unit_price = EXCLUDED.unit_price, \
                 updated_at = NOW()",
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .execute(pool)
        .await?;
    }
    tracing::info!(count = BASELINE_PRODUCTS.len(), "baseline products seeded");
    Ok(())
}
