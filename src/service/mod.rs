//! Services: product find-mutate-save logic and the sample forecast.

mod catalog;
pub mod weather;
pub use catalog::{discounted_price, CatalogService, PRICE_SCALE};
