//! Apply the catalog schema to the database: schema, tables, foreign keys, indexes.
//! Order follows PostgreSQL dependencies (categories and suppliers before products and links).

use crate::error::AppError;
use crate::sql::{qualified_table, quoted, CATEGORIES, PRODUCTS, PRODUCT_SUPPLIERS, SUPPLIERS};
use sqlx::PgPool;

/// DDL statements in execution order. All are idempotent (IF NOT EXISTS).
pub fn migration_statements(schema: &str) -> Vec<String> {
    let categories = qualified_table(schema, CATEGORIES.name);
    let products = qualified_table(schema, PRODUCTS.name);
    let suppliers = qualified_table(schema, SUPPLIERS.name);
    let links = qualified_table(schema, PRODUCT_SUPPLIERS);

    vec![
        format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)),
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n  \
             \"category_id\" INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,\n  \
             \"category_name\" TEXT NOT NULL\n)",
            categories
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n  \
             \"supplier_id\" INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,\n  \
             \"supplier_name\" TEXT NOT NULL,\n  \
             \"address\" TEXT NOT NULL DEFAULT ''\n)",
            suppliers
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n  \
             \"product_id\" INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,\n  \
             \"product_name\" TEXT NOT NULL,\n  \
             \"price\" NUMERIC(18, 2) NOT NULL DEFAULT 0,\n  \
             \"description\" TEXT,\n  \
             \"stock_level\" INTEGER NOT NULL DEFAULT 0,\n  \
             \"category_id\" INTEGER REFERENCES {} (\"category_id\")\n)",
            products, categories
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n  \
             \"product_id\" INTEGER NOT NULL REFERENCES {} (\"product_id\") ON DELETE CASCADE,\n  \
             \"supplier_id\" INTEGER NOT NULL REFERENCES {} (\"supplier_id\") ON DELETE CASCADE,\n  \
             PRIMARY KEY (\"product_id\", \"supplier_id\")\n)",
            links, products, suppliers
        ),
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} (\"category_id\")",
            quoted("idx_products_category_id"),
            products
        ),
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} (\"supplier_id\")",
            quoted("idx_product_suppliers_supplier_id"),
            links
        ),
    ]
}

/// Create the catalog schema and tables if missing.
pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    for sql in migration_statements(schema) {
        tracing::debug!(sql = %sql, "migration");
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!(schema = %schema, "catalog schema ready");
    Ok(())
}
