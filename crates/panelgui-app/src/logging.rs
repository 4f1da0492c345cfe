//! Subscriber setup.
//!
//! The subscriber is installed before the config file is read so that
//! load-time diagnostics are not lost. The filter sits behind a reload
//! layer, and the config's `[logging] level` is swapped in once known.

use panelgui_config::schema::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Resolve the tracing filter directive.
///
/// A CLI value wins over the config. A bare level such as `debug` is
/// scoped to this workspace's crates; anything containing `=` is used
/// verbatim.
pub fn log_directive(cli: Option<&str>, logging: &LoggingConfig) -> String {
    match cli.map(str::trim).filter(|s| !s.is_empty()) {
        Some(d) if d.contains('=') => d.to_owned(),
        Some(level) => format!("panelgui={}", level.to_ascii_lowercase()),
        None => logging.level.directive().to_owned(),
    }
}

/// `RUST_LOG` plus one extra directive.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| "panelgui=info".parse().unwrap()),
    )
}

/// Install the global subscriber. Logs go to stderr; stdout carries
/// script replies.
pub fn init(cli: Option<&str>) -> FilterHandle {
    let directive = log_directive(cli, &LoggingConfig::default());
    let (filter, handle) = reload::Layer::new(env_filter(&directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Switch to the configured level unless the CLI already picked one.
pub fn apply_config(handle: &FilterHandle, cli: Option<&str>, logging: &LoggingConfig) {
    if cli.is_some_and(|s| !s.trim().is_empty()) {
        return;
    }
    let directive = log_directive(None, logging);
    match handle.reload(env_filter(&directive)) {
        Ok(()) => tracing::debug!("Log filter set from config: {directive}"),
        Err(e) => tracing::warn!("Could not apply config log level {directive}: {e}"),
    }
}
