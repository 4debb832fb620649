//! Config validation: identifiers, route prefix, origins.

use crate::error::ConfigError;
use regex::Regex;
use std::sync::OnceLock;

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").expect("identifier regex"))
}

fn prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(/[A-Za-z0-9_.~-]+)+$").expect("prefix regex"))
}

/// Schema names are interpolated into DDL and queries, so only plain PostgreSQL identifiers are accepted.
pub fn validate_schema_name(name: &str) -> Result<(), ConfigError> {
    if identifier_re().is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key: "DB_SCHEMA",
            reason: format!("'{}' is not a plain identifier", name),
        })
    }
}

/// Normalize the API prefix: empty or "/" mounts at root, otherwise a leading slash and no trailing slash.
pub fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let prefixed = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };
    if prefix_re().is_match(&prefixed) {
        Ok(prefixed)
    } else {
        Err(ConfigError::Invalid {
            key: "API_PREFIX",
            reason: format!("'{}' is not a valid path prefix", raw),
        })
    }
}

/// Split a comma-separated origin list. "*" is kept as-is and means any origin.
pub fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut out = Vec::new();
    for origin in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if origin != "*" && !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "CORS_ORIGINS",
                reason: format!("origin '{}' must start with http:// or https://", origin),
            });
        }
        out.push(origin.to_string());
    }
    Ok(out)
}
