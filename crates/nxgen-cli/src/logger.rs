//! Structured logging on stderr.
//!
//! Generated file lists and prompts go to stdout; everything emitted through
//! `tracing` goes to stderr so the two never interleave in pipes.

use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::LogFormat;

/// Parses the `log.format` config value.
pub fn parse_log_format(format: &str) -> Result<LogFormat> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => bail!("unknown log format '{other}' (expected 'text' or 'json')"),
    }
}

/// Installs the global subscriber. `level` is an `EnvFilter` directive.
pub fn init_logger(level: &str, format: LogFormat) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init(),
    };
    installed.context("failed to install the log subscriber")
}
