//! # Logger
//!
//! Installs the process-wide `tracing` subscriber used by every binary in the workspace.
//!
//! * Console output in a compact human format or as JSON lines.
//! * Optional rolling file output through a non-blocking writer.
//! * Filtering: `RUST_LOG` wins when set, then [`LoggerBuilder::env_filter`],
//!   then the level passed to [`LoggerBuilder::level`] (default `INFO`).
//!
//! ## Example
//!
//! ```rust
//! # use numerus_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("numerus")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Line format for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleFormat {
    #[default]
    Compact,
    Json,
}

/// Rolling file output settings.
#[derive(Debug, Clone)]
pub struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileOutput {
    /// Writes rolling log files into `directory` (created on init).
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    #[must_use]
    pub const fn json(mut self) -> Self {
        self.json = true;
        self
    }
}

#[derive(Debug)]
struct LoggerConfig {
    console: Option<ConsoleFormat>,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: Some(ConsoleFormat::Compact),
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}

/// Builder for the global tracing subscriber. A name is required before [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger; the name prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { config: self.config, name: Named(name.into()) }
    }
}

impl LoggerBuilder<Named> {
    /// Minimum level emitted when no filter directive says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Programmatic filter directives (e.g., `numerus=debug,tower_http=info`).
    ///
    /// Ignored when `RUST_LOG` is set. Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Selects the console format, or disables console output with `None`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, format: Option<ConsoleFormat>) -> Self {
        self.config.console = format;
        self
    }

    /// Adds rolling file output.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, output: FileOutput) -> Self {
        self.config.file = Some(output);
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file writer guard and must stay alive
    /// for as long as logs should be flushed to disk.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings,
    /// [`LoggerError::Io`]/[`LoggerError::Appender`] when the log directory is unusable,
    /// and [`LoggerError::Subscriber`] if a global subscriber has already been set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;
        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        match self.config.console {
            Some(ConsoleFormat::Compact) => layers.push(layer().compact().with_ansi(true).boxed()),
            Some(ConsoleFormat::Json) => layers.push(layer().json().boxed()),
            None => {},
        }

        let guard = match self.config.file {
            Some(output) => {
                fs::create_dir_all(&output.directory).context(format!(
                    "Failed to create log directory: {}",
                    output.directory.display()
                ))?;

                let appender = RollingFileAppender::builder()
                    .rotation(output.rotation)
                    .filename_prefix(&self.name.0)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(output.max_files)
                    .build(&output.directory)?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if output.json { file_layer.json().boxed() } else { file_layer.boxed() });

                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the initialized logging system.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use numerus_logger::{ConsoleFormat, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("numerus")
    ///     .console(Some(ConsoleFormat::Json))
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: Unnamed }
    }

    /// Whether log lines are also written to rolling files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.file.as_ref().is_some_and(|output| output.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    if config.console.is_none() && config.file.is_none() {
        return Err(LoggerError::InvalidConfiguration {
            message: "No logging output enabled. Enable console or file output.".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());

    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some_and(|value| !value.is_empty());
    if from_env {
        return Ok(builder.from_env_lossy());
    }

    match &config.env_filter {
        Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid env filter '{filter}': {e}").into(),
            context: None,
        }),
        None => Ok(builder.parse_lossy("")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("test-app");
        assert_eq!(builder.config.console, Some(ConsoleFormat::Compact));
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert!(builder.config.env_filter.is_none());
        assert!(builder.config.file.is_none());
    }

    #[test]
    fn builder_configuration() {
        let output = FileOutput::new("logs").rotation(Rotation::HOURLY).max_files(3).json();
        let builder = Logger::builder()
            .name("test-app")
            .level(LevelFilter::DEBUG)
            .env_filter("numerus=trace")
            .console(None)
            .file(output);

        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.env_filter.as_deref(), Some("numerus=trace"));
        assert!(builder.config.console.is_none());
        let file = builder.config.file.as_ref().expect("file output configured");
        assert_eq!(file.max_files, 3);
        assert!(file.json);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder().name("   ").init().expect_err("empty name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn zero_retention_is_rejected() {
        let err = Logger::builder()
            .name("test-app")
            .file(FileOutput::new("unused").max_files(0))
            .init()
            .expect_err("zero retention must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn no_output_is_rejected() {
        let err =
            Logger::builder().name("test-app").console(None).init().expect_err("must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_programmatic_filter_is_reported() {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return;
        }
        let config = LoggerConfig { env_filter: Some("[[[".to_owned()), ..LoggerConfig::default() };
        assert!(build_env_filter(&config).is_err());
    }

    #[test]
    #[serial]
    fn file_logging_setup() -> Result<(), LoggerError> {
        let tmp_dir = tempdir().context("Failed to create temp dir")?;
        let log_dir = tmp_dir.path().join("logs");

        let logger =
            Logger::builder().name("test-app").file(FileOutput::new(&log_dir)).init()?;
        assert!(logger.writes_files());

        tracing::info!("hello world");
        std::thread::sleep(Duration::from_millis(20));
        drop(logger);

        let has_log = fs::read_dir(&log_dir)
            .context("Failed to read log directory")?
            .flatten()
            .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));

        assert!(has_log, "at least one log file should be created");
        Ok(())
    }
}
