// Runtime configuration handed to the application layer

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub template_dir: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub token_ttl_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            template_dir: "./templates".to_string(),
            max_body_bytes: 2 * 1024 * 1024,
            request_timeout_seconds: 15,
            token_ttl_seconds: 12 * 60 * 60,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub generate_schemas: bool,
}
