use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;

use admin_domain::{DbConfig, RuntimeConfig};

use super::validation::{validate_database_url, validate_log_format};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub generate_schemas: bool,
    pub admin_secret: String,
    pub permission: bool,
    pub template_dir: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub token_ttl_seconds: u64,
    pub log_dir: Option<String>,
    pub log_format: String,
    /// File the values came from; `None` when defaults were used.
    #[serde(skip)]
    pub loaded_from: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            bind_addr: runtime.bind_addr,
            database_url: String::new(),
            database_max_connections: 10,
            generate_schemas: true,
            admin_secret: String::new(),
            permission: true,
            template_dir: runtime.template_dir,
            max_body_bytes: runtime.max_body_bytes,
            request_timeout_seconds: runtime.request_timeout_seconds,
            token_ttl_seconds: runtime.token_ttl_seconds,
            log_dir: None,
            log_format: "pretty".to_string(),
            loaded_from: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("ADMIN_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &str) -> Result<Self> {
        let file_path = Path::new(path);
        let base_dir = file_path.parent();
        // Logging is not up yet; the caller reports a missing file.
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            let mut config: AppConfig = toml::from_str(&content)?;
            config.loaded_from = Some(path.to_string());
            config
        } else {
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.database_url = self.database_url.trim().to_string();
        self.admin_secret = self.admin_secret.trim().to_string();
        self.log_format = self.log_format.trim().to_ascii_lowercase();
        if let Some(log_dir) = &self.log_dir {
            if log_dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
        if self.database_max_connections == 0 {
            self.database_max_connections = 1;
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.template_dir = resolve_path(base, &self.template_dir);
        if let Some(log_dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, log_dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_database_url(&self.database_url)?;
        validate_log_format(&self.log_format)?;
        if self.admin_secret.is_empty() {
            return Err(anyhow!("admin_secret must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.token_ttl_seconds == 0 {
            return Err(anyhow!("token_ttl_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            template_dir: self.template_dir.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            token_ttl_seconds: self.token_ttl_seconds,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            database_url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            generate_schemas: self.generate_schemas,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("ADMIN_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("DATABASE_URL") {
            self.database_url = value;
        }
        if let Ok(value) = env::var("ADMIN_DATABASE_MAX_CONNECTIONS") {
            self.database_max_connections = value.parse().unwrap_or(self.database_max_connections);
        }
        if let Ok(value) = env::var("ADMIN_GENERATE_SCHEMAS") {
            self.generate_schemas = value.parse().unwrap_or(self.generate_schemas);
        }
        if let Ok(value) = env::var("ADMIN_SECRET") {
            self.admin_secret = value;
        }
        if let Ok(value) = env::var("ADMIN_PERMISSION") {
            self.permission = value.parse().unwrap_or(self.permission);
        }
        if let Ok(value) = env::var("ADMIN_TEMPLATE_DIR") {
            self.template_dir = value;
        }
        if let Ok(value) = env::var("ADMIN_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("ADMIN_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("ADMIN_TOKEN_TTL_SECONDS") {
            self.token_ttl_seconds = value.parse().unwrap_or(self.token_ttl_seconds);
        }
        if let Ok(value) = env::var("ADMIN_LOG_DIR") {
            self.log_dir = Some(value);
        }
        if let Ok(value) = env::var("ADMIN_LOG_FORMAT") {
            self.log_format = value;
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
