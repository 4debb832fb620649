//! Process configuration, read once at startup and passed to the router through `AppState`.

use crate::config::validator::{normalize_prefix, parse_origins, validate_schema_name};
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/products";
pub const DEFAULT_API_PREFIX: &str = "/myapi";
pub const DEFAULT_CORS_ORIGINS: &str = "https://localhost:7123";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// Schema holding categories, products, suppliers and product_suppliers.
    pub db_schema: String,
    pub max_connections: u32,
    pub create_database: bool,
    pub run_migrations: bool,
    pub bind_addr: SocketAddr,
    /// Empty string mounts API routes at the root.
    pub api_prefix: String,
    pub cors_origins: Vec<String>,
    pub body_limit_bytes: usize,
    /// When set, GET productbyid answers 404 for a missing row instead of an empty 200.
    pub strict_product_lookup: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            db_schema: "public".into(),
            max_connections: 5,
            create_database: true,
            run_migrations: true,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            api_prefix: DEFAULT_API_PREFIX.into(),
            cors_origins: vec![DEFAULT_CORS_ORIGINS.into()],
            body_limit_bytes: 1024 * 1024,
            strict_product_lookup: false,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_schema = get("DB_SCHEMA").unwrap_or(defaults.db_schema);
        validate_schema_name(&db_schema)?;

        let api_prefix = match lookup("API_PREFIX") {
            Some(raw) => normalize_prefix(&raw)?,
            None => defaults.api_prefix,
        };

        let cors_origins = match get("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.cors_origins,
        };

        let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), defaults.max_connections)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }

        Ok(AppConfig {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            db_schema,
            max_connections,
            create_database: parse_bool("DB_CREATE_DATABASE", get("DB_CREATE_DATABASE"), defaults.create_database)?,
            run_migrations: parse_bool("DB_MIGRATE", get("DB_MIGRATE"), defaults.run_migrations)?,
            bind_addr: parse_or("BIND_ADDR", get("BIND_ADDR"), defaults.bind_addr)?,
            api_prefix,
            cors_origins,
            body_limit_bytes: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), defaults.body_limit_bytes)?,
            strict_product_lookup: parse_bool(
                "PRODUCT_LOOKUP_STRICT",
                get("PRODUCT_LOOKUP_STRICT"),
                defaults.strict_product_lookup,
            )?,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(s) => s.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("'{}': {}", s, e),
        }),
    }
}

fn parse_bool(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(s) = raw else { return Ok(default) };
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            reason: format!("'{}' is not a boolean", s),
        }),
    }
}
