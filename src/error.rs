use std::error::Error;
use std::fmt::{Display, Formatter};
use log::SetLoggerError;
use tempfile::PersistError;

#[derive(Debug)]
pub enum PpmGenError {
    IOError(String),
    LoggerError(String),
}

impl Error for PpmGenError {}

impl Display for PpmGenError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PpmGenError::IOError(e) => write!(f, "i/o error {}", e),
            PpmGenError::LoggerError(e) => write!(f, "logger error {}", e)
        }
    }
}

impl From<std::io::Error> for PpmGenError {
    fn from(error: std::io::Error) -> Self {
        PpmGenError::IOError(error.to_string())
    }
}

impl From<SetLoggerError> for PpmGenError {
    fn from(error: SetLoggerError) -> Self {
        PpmGenError::LoggerError(error.to_string())
    }
}

impl From<PersistError> for PpmGenError {
    fn from(error: PersistError) -> Self {
        PpmGenError::IOError(error.error.to_string())
    }
}
