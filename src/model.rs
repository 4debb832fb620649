//! Entities and request/response shapes. JSON keys are camelCase on the wire.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub stock_level: i32,
    pub category_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub supplier_id: i32,
    pub supplier_name: String,
    pub address: String,
}

/// Product row joined with its first supplier. Supplier fields are empty strings when there is none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSupplier {
    pub product_id: i32,
    pub product_name: String,
    pub supplier_name: String,
    pub supplier_address: String,
    pub price: Decimal,
}

/// Product representation accepted by addproduct and updateproduct.
/// Missing fields take their defaults; `productId` is ignored on create.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub product_id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub stock_level: i32,
    pub category_id: Option<i32>,
}

impl ProductInput {
    /// Values to insert; the store assigns the id.
    pub fn into_new(self) -> NewProduct {
        NewProduct {
            product_name: self.product_name,
            price: self.price,
            description: self.description,
            stock_level: self.stock_level,
            category_id: self.category_id,
        }
    }

    /// Copy the updatable fields onto an existing row. Supplier links are not part of the row.
    pub fn apply_to(self, existing: &mut Product) {
        existing.product_name = self.product_name;
        existing.price = self.price;
        existing.description = self.description;
        existing.stock_level = self.stock_level;
        existing.category_id = self.category_id;
    }
}

/// Product body where only the id is read (applydiscount). A missing id binds as 0.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRef {
    pub product_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub product_name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub stock_level: i32,
    pub category_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewCategory {
    pub category_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewSupplier {
    pub supplier_name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: NaiveDate,
    #[serde(rename = "temperatureC")]
    pub temperature_c: i32,
    #[serde(rename = "temperatureF")]
    pub temperature_f: i32,
    pub summary: Option<String>,
}
