//! Product and category routes. Paths keep the original lowercase names; the mutation
//! routes also answer with a trailing slash, and /Products is an alias of /products.

use crate::handlers::{
    add_product, apply_discount, delete_product, list_categories, list_products, product_by_id,
    product_suppliers, products_by_category, update_product,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/Products", get(list_products))
        .route("/categories", get(list_categories))
        .route("/productsbycatid", get(products_by_category))
        .route("/productbyid", get(product_by_id))
        .route("/productsuppliers", get(product_suppliers))
        .route("/addproduct", post(add_product))
        .route("/updateproduct", put(update_product))
        .route("/updateproduct/", put(update_product))
        .route("/applydiscount", put(apply_discount))
        .route("/applydiscount/", put(apply_discount))
        .route("/deleteproduct", delete(delete_product))
        .route("/deleteproduct/", delete(delete_product))
        .with_state(state)
}
