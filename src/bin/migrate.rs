//! Migration entrypoint: create the database if missing, apply DDL, seed the
//! baseline catalog. Re-runnable; kept out of the serving process.

use products_api::{apply_migrations, ensure_database_exists, seed_products, AppConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("products_api=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await?;

    apply_migrations(&pool).await?;
    seed_products(&pool).await?;
    tracing::info!("migrations applied");
    Ok(())
}
