//! Static table descriptions for the product catalog.

/// One table: name, single-column primary key, and all columns in select order (PK first).
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub pk: &'static str,
    pub columns: &'static [&'static str],
}

impl Table {
    /// Columns written on insert/update, in bind order.
    pub fn writable_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().copied().filter(move |c| *c != self.pk)
    }
}

pub const CATEGORIES: Table = Table {
    name: "categories",
    pk: "category_id",
    columns: &["category_id", "category_name"],
};

pub const PRODUCTS: Table = Table {
    name: "products",
    pk: "product_id",
    columns: &[
        "product_id",
        "product_name",
        "price",
        "description",
        "stock_level",
        "category_id",
    ],
};

pub const SUPPLIERS: Table = Table {
    name: "suppliers",
    pk: "supplier_id",
    columns: &["supplier_id", "supplier_name", "address"],
};

/// Link table between products and suppliers (composite key, not a `Table`).
pub const PRODUCT_SUPPLIERS: &str = "product_suppliers";
