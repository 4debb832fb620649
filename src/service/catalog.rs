//! Find-mutate-save operations on products.

use crate::error::AppError;
use crate::model::{Product, ProductInput};
use crate::repository::Store;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for prices (NUMERIC(18, 2) in the store).
pub const PRICE_SCALE: u32 = 2;

pub struct CatalogService;

impl CatalogService {
    /// Copy name, price, description, stock level and category onto the stored row.
    pub async fn update_product(store: &dyn Store, input: ProductInput) -> Result<Product, AppError> {
        let id = input.product_id;
        let mut existing = store
            .products()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        input.apply_to(&mut existing);
        let saved = store
            .products()
            .update(&existing)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        tracing::info!(product_id = id, "product updated");
        Ok(saved)
    }

    /// Reduce the stored price by `percent` percent. The percentage is not bounded.
    pub async fn apply_discount(store: &dyn Store, id: i32, percent: f64) -> Result<Product, AppError> {
        let mut existing = store
            .products()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        let old_price = existing.price;
        existing.price = discounted_price(old_price, percent)?;
        let saved = store
            .products()
            .update(&existing)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        tracing::info!(product_id = id, %old_price, new_price = %saved.price, percent, "discount applied");
        Ok(saved)
    }

    pub async fn delete_product(store: &dyn Store, id: i32) -> Result<(), AppError> {
        if store.products().find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("product {}", id)));
        }
        if !store.products().delete(id).await? {
            return Err(AppError::NotFound(format!("product {}", id)));
        }
        tracing::info!(product_id = id, "product deleted");
        Ok(())
    }
}

/// `price - price * percent / 100`, rounded to the price scale (midpoint away from zero).
pub fn discounted_price(price: Decimal, percent: f64) -> Result<Decimal, AppError> {
    let percent = Decimal::from_f64(percent)
        .ok_or_else(|| AppError::BadRequest(format!("percentDiscount {} is not a finite number", percent)))?;
    let hundred = Decimal::ONE_HUNDRED;
    let discount = price
        .checked_mul(percent)
        .and_then(|v| v.checked_div(hundred))
        .ok_or_else(|| AppError::BadRequest("percentDiscount out of range".into()))?;
    let result = price
        .checked_sub(discount)
        .ok_or_else(|| AppError::BadRequest("percentDiscount out of range".into()))?;
    Ok(result.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero))
}
