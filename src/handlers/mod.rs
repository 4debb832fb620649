//! HTTP handlers for the product catalog and the sample forecast.

pub mod categories;
pub mod products;
pub mod weather;
pub use categories::*;
pub use products::*;
pub use weather::*;
