//! Products API: CRUD over products, categories and suppliers backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Category, Product, ProductSupplier, Supplier, WeatherForecast};
pub use repository::{CategoryRepository, PgStore, ProductRepository, Store, SupplierRepository};
pub use routes::{build_app, catalog_routes, common_routes};
pub use service::CatalogService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
