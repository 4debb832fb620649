//! PostgreSQL repositories: parameterized statements from `crate::sql`, hand-written row mapping.

use super::{CategoryRepository, ProductRepository, Store, SupplierRepository};
use crate::error::AppError;
use crate::model::{Category, NewCategory, NewProduct, NewSupplier, Product, ProductSupplier, Supplier};
use crate::sql::{self, CATEGORIES, PRODUCTS, SUPPLIERS};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        product_id: row.try_get("product_id")?,
        product_name: row.try_get("product_name")?,
        price: row.try_get("price")?,
        description: row.try_get("description")?,
        stock_level: row.try_get("stock_level")?,
        category_id: row.try_get("category_id")?,
    })
}

fn category_from_row(row: &PgRow) -> Result<Category, sqlx::Error> {
    Ok(Category {
        category_id: row.try_get("category_id")?,
        category_name: row.try_get("category_name")?,
    })
}

fn supplier_from_row(row: &PgRow) -> Result<Supplier, sqlx::Error> {
    Ok(Supplier {
        supplier_id: row.try_get("supplier_id")?,
        supplier_name: row.try_get("supplier_name")?,
        address: row.try_get("address")?,
    })
}

fn product_supplier_from_row(row: &PgRow) -> Result<ProductSupplier, sqlx::Error> {
    Ok(ProductSupplier {
        product_id: row.try_get("product_id")?,
        product_name: row.try_get("product_name")?,
        supplier_name: row.try_get("supplier_name")?,
        supplier_address: row.try_get("supplier_address")?,
        price: row.try_get("price")?,
    })
}

fn map_rows<T>(rows: &[PgRow], f: fn(&PgRow) -> Result<T, sqlx::Error>) -> Result<Vec<T>, AppError> {
    rows.iter().map(|r| f(r).map_err(AppError::from)).collect()
}

fn map_optional<T>(row: Option<PgRow>, f: fn(&PgRow) -> Result<T, sqlx::Error>) -> Result<Option<T>, AppError> {
    row.as_ref().map(f).transpose().map_err(AppError::from)
}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
    schema: String,
}

impl PgProductRepository {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgProductRepository {
            pool,
            schema: schema.into(),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: &NewProduct) -> Result<Product, AppError> {
        let sql = sql::insert(&PRODUCTS, &self.schema);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query(&sql)
            .bind(&product.product_name)
            .bind(product.price)
            .bind(&product.description)
            .bind(product.stock_level)
            .bind(product.category_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(product_from_row(&row)?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let sql = sql::select_by_id(&PRODUCTS, &self.schema);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        map_optional(row, product_from_row)
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let sql = sql::select_all(&PRODUCTS, &self.schema);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        map_rows(&rows, product_from_row)
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Product>, AppError> {
        let sql = sql::select_where_eq(&PRODUCTS, &self.schema, "category_id");
        tracing::debug!(sql = %sql, category_id, "query");
        let rows = sqlx::query(&sql).bind(category_id).fetch_all(&self.pool).await?;
        map_rows(&rows, product_from_row)
    }

    async fn list_with_first_supplier(&self) -> Result<Vec<ProductSupplier>, AppError> {
        let sql = sql::select_products_with_first_supplier(&self.schema);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        map_rows(&rows, product_supplier_from_row)
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError> {
        let sql = sql::update(&PRODUCTS, &self.schema);
        tracing::debug!(sql = %sql, id = product.product_id, "query");
        let row = sqlx::query(&sql)
            .bind(&product.product_name)
            .bind(product.price)
            .bind(&product.description)
            .bind(product.stock_level)
            .bind(product.category_id)
            .bind(product.product_id)
            .fetch_optional(&self.pool)
            .await?;
        map_optional(row, product_from_row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = sql::delete(&PRODUCTS, &self.schema);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.is_some())
    }
}

#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
    schema: String,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgCategoryRepository {
            pool,
            schema: schema.into(),
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, category: &NewCategory) -> Result<Category, AppError> {
        let sql = sql::insert(&CATEGORIES, &self.schema);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query(&sql)
            .bind(&category.category_name)
            .fetch_one(&self.pool)
            .await?;
        Ok(category_from_row(&row)?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        let sql = sql::select_by_id(&CATEGORIES, &self.schema);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        map_optional(row, category_from_row)
    }

    async fn list(&self) -> Result<Vec<Category>, AppError> {
        let sql = sql::select_all(&CATEGORIES, &self.schema);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        map_rows(&rows, category_from_row)
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>, AppError> {
        let sql = sql::update(&CATEGORIES, &self.schema);
        tracing::debug!(sql = %sql, id = category.category_id, "query");
        let row = sqlx::query(&sql)
            .bind(&category.category_name)
            .bind(category.category_id)
            .fetch_optional(&self.pool)
            .await?;
        map_optional(row, category_from_row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = sql::delete(&CATEGORIES, &self.schema);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.is_some())
    }
}

#[derive(Clone)]
pub struct PgSupplierRepository {
    pool: PgPool,
    schema: String,
}

impl PgSupplierRepository {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgSupplierRepository {
            pool,
            schema: schema.into(),
        }
    }
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn create(&self, supplier: &NewSupplier) -> Result<Supplier, AppError> {
        let sql = sql::insert(&SUPPLIERS, &self.schema);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query(&sql)
            .bind(&supplier.supplier_name)
            .bind(&supplier.address)
            .fetch_one(&self.pool)
            .await?;
        Ok(supplier_from_row(&row)?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>, AppError> {
        let sql = sql::select_by_id(&SUPPLIERS, &self.schema);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        map_optional(row, supplier_from_row)
    }

    async fn list(&self) -> Result<Vec<Supplier>, AppError> {
        let sql = sql::select_all(&SUPPLIERS, &self.schema);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        map_rows(&rows, supplier_from_row)
    }

    async fn update(&self, supplier: &Supplier) -> Result<Option<Supplier>, AppError> {
        let sql = sql::update(&SUPPLIERS, &self.schema);
        tracing::debug!(sql = %sql, id = supplier.supplier_id, "query");
        let row = sqlx::query(&sql)
            .bind(&supplier.supplier_name)
            .bind(&supplier.address)
            .bind(supplier.supplier_id)
            .fetch_optional(&self.pool)
            .await?;
        map_optional(row, supplier_from_row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = sql::delete(&SUPPLIERS, &self.schema);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.is_some())
    }

    async fn link_product(&self, product_id: i32, supplier_id: i32) -> Result<(), AppError> {
        let sql = sql::insert_product_supplier(&self.schema);
        tracing::debug!(sql = %sql, product_id, supplier_id, "query");
        sqlx::query(&sql)
            .bind(product_id)
            .bind(supplier_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_for_product(&self, product_id: i32) -> Result<Vec<Supplier>, AppError> {
        let sql = sql::select_suppliers_for_product(&self.schema);
        tracing::debug!(sql = %sql, product_id, "query");
        let rows = sqlx::query(&sql).bind(product_id).fetch_all(&self.pool).await?;
        map_rows(&rows, supplier_from_row)
    }
}

/// The three repositories over one shared pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    products: PgProductRepository,
    categories: PgCategoryRepository,
    suppliers: PgSupplierRepository,
}

impl PgStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgStore {
            products: PgProductRepository::new(pool.clone(), schema),
            categories: PgCategoryRepository::new(pool.clone(), schema),
            suppliers: PgSupplierRepository::new(pool.clone(), schema),
            pool,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn suppliers(&self) -> &dyn SupplierRepository {
        &self.suppliers
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
