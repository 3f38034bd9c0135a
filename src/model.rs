//! Product entity: wire shape and row mapping.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog product. `id` is assigned by the caller on create; the table's
/// primary key is the only duplicate protection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub unit_price: f64,
}
