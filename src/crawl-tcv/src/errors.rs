use core_tcv::CrawlError;
use data_model_tcv::SinkError;
use data_model_tcv::db::ConnectionPoolError;

#[derive(Debug)]
pub enum Error {
    CrawlError(CrawlError),
    SinkError(SinkError),
    DbPoolError(ConnectionPoolError),
    ConfigError(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CrawlError(e) => write!(f, "{}", e),
            Self::SinkError(e) => write!(f, "Failed to save job: {}", e),
            Self::DbPoolError(e) => write!(f, "{}", e),
            Self::ConfigError(msg) => write!(f, "Invalid configuration: {}", msg),
            Self::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CrawlError> for Error {
    fn from(error: CrawlError) -> Self {
        Self::CrawlError(error)
    }
}

impl From<SinkError> for Error {
    fn from(error: SinkError) -> Self {
        Self::SinkError(error)
    }
}

impl From<ConnectionPoolError> for Error {
    fn from(error: ConnectionPoolError) -> Self {
        Self::DbPoolError(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}
