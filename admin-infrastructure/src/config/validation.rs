use anyhow::{anyhow, Result};

pub fn validate_database_url(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("DATABASE_URL is not set"));
    }
    if !(trimmed.starts_with("postgres://") || trimmed.starts_with("postgresql://")) {
        return Err(anyhow!("database_url must be a postgres:// url"));
    }
    Ok(())
}

pub fn validate_log_format(value: &str) -> Result<()> {
    match value {
        "pretty" | "json" => Ok(()),
        other => Err(anyhow!("log_format must be 'pretty' or 'json', got '{}'", other)),
    }
}
