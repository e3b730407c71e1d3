use thiserror::Error;

/// Failures while bringing the application up: config and logging.
///
/// Database failures are not wrapped here; they stay `rusqlite::Error`.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Config serialization error: {0}")]
    ConfigSave(#[from] toml::ser::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    LogLevel(String),

    #[error("Logging already initialized at `{0}`")]
    LoggingActive(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;
