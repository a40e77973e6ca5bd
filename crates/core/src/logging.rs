use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that moves the log files out of the home directory.
pub const LOG_DIR_ENV: &str = "BUILDSHIP_LOG_DIR";

const DEFAULT_FILTER: &str = "warn,buildship_core=info,buildship_cli=info";
const VERBOSE_FILTER: &str = "info,buildship_core=debug,buildship_cli=debug";

/// How a buildship binary sets up tracing.
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Prefix of the rolling log files, e.g. `cli` for `cli.log.2026-10-16`.
    pub component: String,
    pub log_dir: PathBuf,
    pub to_stderr: bool,
    /// Emits the per-pass validation details.
    pub verbose: bool,
}

impl LoggingOptions {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            log_dir: log_dir_with(|key| std::env::var(key).ok()),
            to_stderr: false,
            verbose: false,
        }
    }

    pub fn with_stderr(mut self, to_stderr: bool) -> Self {
        self.to_stderr = to_stderr;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn default_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        }
    }
}

/// `$BUILDSHIP_LOG_DIR`, else `~/.buildship/logs`.
pub fn log_dir_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(dir) = env(LOG_DIR_ENV).filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".buildship/logs")
}

/// `RUST_LOG` overrides the filter chosen by the options.
pub fn init_logging(options: &LoggingOptions) -> WorkerGuard {
    let _ = std::fs::create_dir_all(&options.log_dir);

    let file_appender = tracing_appender::rolling::daily(
        &options.log_dir,
        format!("{}.log", options.component),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.default_filter()));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if options.to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
            .without_time();
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}
