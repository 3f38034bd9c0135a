//! Serving process. Expects the schema to already exist (run the migrate
//! binary first).

use axum::Router;
use products_api::{common_routes, product_routes, AppConfig, AppState, ProductStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("products_api=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    let state = AppState {
        store: ProductStore::new(pool),
    };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", product_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
