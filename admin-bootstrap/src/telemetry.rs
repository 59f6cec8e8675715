use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Stdout logging in `pretty` or `json` format, plus a daily rolling file
/// under `log_dir` when one is configured. `RUST_LOG` overrides the level.
pub fn init(log_dir: Option<&str>, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = log_format == "json";

    let file_appender = match log_dir {
        Some(dir) => Some(
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("admin-dashboard")
                .filename_suffix("log")
                .build(dir)?,
        ),
        None => None,
    };
    let (json_file, plain_file) = match file_appender {
        Some(appender) if json => (Some(fmt::layer().json().with_writer(appender)), None),
        Some(appender) => (
            None,
            Some(fmt::layer().with_ansi(false).with_writer(appender)),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_target(true)))
        .with((!json).then(|| fmt::layer().with_target(true)))
        .with(json_file)
        .with(plain_file)
        .try_init()?;
    Ok(())
}
