//! Products API: CRUD REST service for a product catalog over PostgreSQL.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use docs::ApiDoc;
pub use error::AppError;
pub use migration::{apply_migrations, ensure_database_exists};
pub use model::Product;
pub use routes::{common_routes, product_routes};
pub use seed::seed_products;
pub use state::AppState;
pub use store::ProductStore;
