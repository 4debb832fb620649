//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from static table descriptions.
//! Identifiers come from code and validated config only; values are always bound as `$n` parameters.

use crate::sql::tables::{Table, PRODUCTS, PRODUCT_SUPPLIERS, SUPPLIERS};

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

fn column_list(table: &Table) -> String {
    table.columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// SELECT all rows ORDER BY pk.
pub fn select_all(table: &Table, schema: &str) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(table),
        qualified_table(schema, table.name),
        quoted(table.pk)
    )
}

/// SELECT by primary key. Caller binds the id as $1.
pub fn select_by_id(table: &Table, schema: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(table),
        qualified_table(schema, table.name),
        quoted(table.pk)
    )
}

/// SELECT rows where one column equals $1, ORDER BY pk.
pub fn select_where_eq(table: &Table, schema: &str, column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1 ORDER BY {}",
        column_list(table),
        qualified_table(schema, table.name),
        quoted(column),
        quoted(table.pk)
    )
}

/// INSERT every non-PK column ($1..$n in `writable_columns` order); the store assigns the PK.
pub fn insert(table: &Table, schema: &str) -> String {
    let cols: Vec<String> = table.writable_columns().map(quoted).collect();
    let placeholders: Vec<String> = (1..=cols.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        qualified_table(schema, table.name),
        cols.join(", "),
        placeholders.join(", "),
        column_list(table)
    )
}

/// UPDATE every non-PK column ($1..$n) WHERE pk = $n+1.
pub fn update(table: &Table, schema: &str) -> String {
    let sets: Vec<String> = table
        .writable_columns()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 1))
        .collect();
    let id_param = sets.len() + 1;
    format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        qualified_table(schema, table.name),
        sets.join(", "),
        quoted(table.pk),
        id_param,
        column_list(table)
    )
}

/// DELETE by id ($1), returning the deleted key.
pub fn delete(table: &Table, schema: &str) -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1 RETURNING {}",
        qualified_table(schema, table.name),
        quoted(table.pk),
        quoted(table.pk)
    )
}

/// Products joined with their first supplier (lowest supplier id) via a lateral subquery.
/// Missing supplier fields come back as empty strings.
pub fn select_products_with_first_supplier(schema: &str) -> String {
    let products = qualified_table(schema, PRODUCTS.name);
    let suppliers = qualified_table(schema, SUPPLIERS.name);
    let links = qualified_table(schema, PRODUCT_SUPPLIERS);
    format!(
        "SELECT p.\"product_id\", p.\"product_name\", \
         COALESCE(s.\"supplier_name\", '') AS \"supplier_name\", \
         COALESCE(s.\"address\", '') AS \"supplier_address\", \
         p.\"price\" \
         FROM {products} p \
         LEFT JOIN LATERAL (\
         SELECT sup.\"supplier_name\", sup.\"address\" FROM {links} ps \
         JOIN {suppliers} sup ON sup.\"supplier_id\" = ps.\"supplier_id\" \
         WHERE ps.\"product_id\" = p.\"product_id\" \
         ORDER BY sup.\"supplier_id\" LIMIT 1\
         ) s ON TRUE \
         ORDER BY p.\"product_id\""
    )
}

/// Link a product to a supplier; repeated links are ignored.
pub fn insert_product_supplier(schema: &str) -> String {
    format!(
        "INSERT INTO {} (\"product_id\", \"supplier_id\") VALUES ($1, $2) ON CONFLICT DO NOTHING",
        qualified_table(schema, PRODUCT_SUPPLIERS)
    )
}

/// Suppliers linked to one product ($1), ordered by supplier id.
pub fn select_suppliers_for_product(schema: &str) -> String {
    let cols: Vec<String> = SUPPLIERS.columns.iter().map(|c| format!("s.{}", quoted(c))).collect();
    format!(
        "SELECT {} FROM {} s JOIN {} ps ON ps.\"supplier_id\" = s.\"supplier_id\" \
         WHERE ps.\"product_id\" = $1 ORDER BY s.\"supplier_id\"",
        cols.join(", "),
        qualified_table(schema, SUPPLIERS.name),
        qualified_table(schema, PRODUCT_SUPPLIERS)
    )
}
