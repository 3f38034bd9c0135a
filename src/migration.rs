//! Schema DDL and database bootstrap. Run by the migrate binary, not by the
//! serving process.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Apply products table DDL. Idempotent (IF NOT EXISTS throughout), so the
/// migrate binary can be re-run freely.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY,
            product_name TEXT NOT NULL,
            unit_price DOUBLE PRECISION NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;

    // Backs the name-ordered list endpoint.
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_products_product_name ON products (product_name)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to
/// the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::Db(sqlx::Error::Configuration("DATABASE_URL: no path".into())))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_db_name_from_url() {
        let (admin, name) =
            parse_db_name_from_url("postgres://user:pw@localhost:5432/products").unwrap();
        assert_eq!(admin, "postgres://user:pw@localhost:5432/postgres");
        assert_eq!(name, "products");
    }

    #[test]
    fn strips_query_string_from_db_name() {
        let (_, name) =
            parse_db_name_from_url("postgres://localhost/products?sslmode=disable").unwrap();
        assert_eq!(name, "products");
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("products"), "\"products\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\\\"ird\"");
    }
}
