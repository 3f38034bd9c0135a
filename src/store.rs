//! Typed CRUD access to the products table. Stateless command methods
//! (insert/replace/remove) rather than tracked entity state.

use crate::error::AppError;
use crate::model::Product;
use sqlx::PgPool;

const COLUMNS: &str = "id, product_name, unit_price";

#[derive(Clone)]
pub struct ProductStore {
    pool: PgPool,
}

impl ProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// All products ordered by name ascending (store default collation).
    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM products ORDER BY product_name ASC");
        tracing::debug!(sql = %sql, "query");
        let products = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(products)
    }

    /// One product by id, or None. Errors if more than one row matches: the
    /// primary key rules that out, so extra rows mean corrupt data and we
    /// refuse to pick one.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        let mut rows = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        if rows.len() > 1 {
            return Err(AppError::Integrity(id));
        }
        Ok(rows.pop())
    }

    /// Insert with the caller-supplied id. No uniqueness check here; a
    /// duplicate id surfaces as a write failure from the primary key.
    pub async fn insert(&self, product: &Product) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO products (id, product_name, unit_price) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id = product.id, "query");
        let created = sqlx::query_as::<_, Product>(&sql)
            .bind(product.id)
            .bind(&product.product_name)
            .bind(product.unit_price)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    /// Overwrite all fields of the row matching `product.id`. Zero rows
    /// affected is a successful no-op; callers must tolerate it.
    pub async fn replace(&self, product: &Product) -> Result<u64, AppError> {
        let sql = "UPDATE products SET product_name = $2, unit_price = $3, updated_at = NOW() \
                   WHERE id = $1";
        tracing::debug!(sql = %sql, id = product.id, "query");
        let result = sqlx::query(sql)
            .bind(product.id)
            .bind(&product.product_name)
            .bind(product.unit_price)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the row if present. Absence is not an error.
    pub async fn remove(&self, id: i32) -> Result<u64, AppError> {
        let sql = "DELETE FROM products WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
