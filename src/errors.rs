use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),
    #[error("invalid locator: {0}")]
    InvalidLocator(String),
    #[error("unknown country code: {0}")]
    UnknownCountryCode(String),
    #[error("lookup degraded: {0}")]
    LookupDegraded(String),
    #[error("write error: {0}")]
    WriteError(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    IO(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self { AppError::IO(format!("{}", e)) }
}
