//! OpenAPI document for the product API surface.

use crate::handlers::products;
use crate::model::Product;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        products::list,
        products::get_by_id,
        products::create,
        products::update,
        products::delete,
    ),
    components(schemas(Product)),
    tags((name = "products", description = "Product catalog CRUD"))
)]
pub struct ApiDoc;
