//! Repository interfaces per entity. Implementations own the SQL; callers see entities only.

mod postgres;

pub use postgres::{PgCategoryRepository, PgProductRepository, PgStore, PgSupplierRepository};

use crate::error::AppError;
use crate::model::{Category, NewCategory, NewProduct, NewSupplier, Product, ProductSupplier, Supplier};
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &NewProduct) -> Result<Product, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError>;
    async fn list(&self) -> Result<Vec<Product>, AppError>;
    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Product>, AppError>;
    /// Every product with its first supplier (lowest supplier id), or empty supplier fields.
    async fn list_with_first_supplier(&self) -> Result<Vec<ProductSupplier>, AppError>;
    /// Persist all non-key fields of `product`. Returns `None` when the row no longer exists.
    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError>;
    /// Returns false when there was no row to delete.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &NewCategory) -> Result<Category, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, AppError>;
    async fn list(&self) -> Result<Vec<Category>, AppError>;
    async fn update(&self, category: &Category) -> Result<Option<Category>, AppError>;
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn create(&self, supplier: &NewSupplier) -> Result<Supplier, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>, AppError>;
    async fn list(&self) -> Result<Vec<Supplier>, AppError>;
    async fn update(&self, supplier: &Supplier) -> Result<Option<Supplier>, AppError>;
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
    /// Associate a supplier with a product. Linking twice is a no-op.
    async fn link_product(&self, product_id: i32, supplier_id: i32) -> Result<(), AppError>;
    /// Suppliers associated with one product, ordered by supplier id.
    async fn list_for_product(&self, product_id: i32) -> Result<Vec<Supplier>, AppError>;
}

/// Everything the handlers need from persistence.
#[async_trait]
pub trait Store: Send + Sync {
    fn products(&self) -> &dyn ProductRepository;
    fn categories(&self) -> &dyn CategoryRepository;
    fn suppliers(&self) -> &dyn SupplierRepository;
    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
