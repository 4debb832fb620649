//! Product handlers: list, by category, by id, with supplier, add, update, discount, delete.

use crate::error::AppError;
use crate::model::{ProductInput, ProductRef};
use crate::response::{created, no_content, ok_or_empty};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
pub struct DiscountParam {
    #[serde(rename = "percentDiscount")]
    pub percent_discount: f64,
}

pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.products().list().await?;
    Ok(Json(rows))
}

pub async fn products_by_category(
    State(state): State<AppState>,
    query: Result<Query<IdParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(IdParam { id }) = query?;
    let rows = state.store.products().list_by_category(id).await?;
    Ok(Json(rows))
}

pub async fn product_by_id(
    State(state): State<AppState>,
    query: Result<Query<IdParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(IdParam { id }) = query?;
    let row = state.store.products().find_by_id(id).await?;
    if row.is_none() {
        if state.config.strict_product_lookup {
            return Err(AppError::NotFound(format!("product {}", id)));
        }
        tracing::warn!(product_id = id, "productbyid miss answered with empty 200");
    }
    Ok(ok_or_empty(row))
}

pub async fn product_suppliers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.products().list_with_first_supplier().await?;
    Ok(Json(rows))
}

pub async fn add_product(
    State(state): State<AppState>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = body?;
    let product = state.store.products().create(&input.into_new()).await?;
    tracing::info!(product_id = product.product_id, "product created");
    let location = format!("{}/productbyid?id={}", state.config.api_prefix, product.product_id);
    Ok(created(&location, product))
}

pub async fn update_product(
    State(state): State<AppState>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = body?;
    CatalogService::update_product(state.store.as_ref(), input).await?;
    Ok(no_content())
}

pub async fn apply_discount(
    State(state): State<AppState>,
    query: Result<Query<DiscountParam>, QueryRejection>,
    body: Result<Json<ProductRef>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(DiscountParam { percent_discount }) = query?;
    let Json(product) = body?;
    CatalogService::apply_discount(state.store.as_ref(), product.product_id, percent_discount).await?;
    Ok(no_content())
}

pub async fn delete_product(
    State(state): State<AppState>,
    query: Result<Query<IdParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(IdParam { id }) = query?;
    CatalogService::delete_product(state.store.as_ref(), id).await?;
    Ok(no_content())
}
