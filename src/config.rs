use std::env;

/// Runtime configuration, resolved once at startup.
/// Every field has a development default and an environment override.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Path to the SQLite database file.
    pub db_path: String,
    /// Path to the schema applied at startup.
    pub schema_path: String,
    /// Public base URL prefixed onto stored image references that are
    /// not already absolute URLs.
    pub image_base_url: String,
    /// Admin session lifetime in seconds.
    pub session_ttl_secs: i64,
    /// When set, the admin password is rewritten at startup.
    pub admin_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            db_path: "vitrine.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            image_base_url: "/static/imoveis".to_string(),
            session_ttl_secs: 60 * 60 * 24 * 7,
            admin_password: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env_or("VITRINE_ADDR", defaults.bind_addr),
            db_path: env_or("VITRINE_DB", defaults.db_path),
            schema_path: env_or("VITRINE_SCHEMA", defaults.schema_path),
            image_base_url: env_or("VITRINE_IMAGE_BASE_URL", defaults.image_base_url),
            session_ttl_secs: env::var("VITRINE_SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_ttl_secs),
            admin_password: env::var("VITRINE_ADMIN_PASSWORD").ok(),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}
