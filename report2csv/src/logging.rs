//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Diagnostics go to stderr so stdout only carries the completion message.
//!
//! # Log Levels
//!
//! - `error`: fatal conditions
//! - `warn`: default; only unusual input is reported
//! - `info`: stage progress and row counts (`-v`)
//! - `debug`: skipped rows, duplicate labels, encoding fallback (`-vv`)
//! - `trace`: everything (`-vvv`)
//!
//! Without `-v`/`-q`, `RUST_LOG` decides the filter.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` is not consulted or not set.
    pub level: LevelFilter,
    /// Read `RUST_LOG` for the filter.
    pub use_env_filter: bool,
    /// Include the module path in each line.
    pub with_target: bool,
    /// Use ANSI colors.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            use_env_filter: true,
            with_target: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity flags.
    ///
    /// - `-q`: errors only
    /// - none: warn, or `RUST_LOG` when set
    /// - `-v`: info, `-vv`: debug, `-vvv`: trace
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => LevelFilter::ERROR,
            (false, 0) => LevelFilter::WARN,
            (false, 1) => LevelFilter::INFO,
            (false, 2) => LevelFilter::DEBUG,
            (false, _) => LevelFilter::TRACE,
        };
        Self {
            level,
            use_env_filter: !quiet && verbose == 0,
            ..Default::default()
        }
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Build the filter for this configuration.
    pub fn env_filter(&self) -> EnvFilter {
        if self.use_env_filter {
            EnvFilter::builder()
                .with_default_directive(self.level.into())
                .from_env_lossy()
        } else {
            EnvFilter::builder()
                .with_default_directive(self.level.into())
                .parse_lossy("")
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(
    config: &LogConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .with_ansi(config.with_ansi)
        .without_time();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
}
