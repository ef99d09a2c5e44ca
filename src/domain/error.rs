use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    Internal(String),
    ValidationError(String),
    ParseError(String),
    GeoError(String),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::GeoError(msg) => write!(f, "Geo error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_variant() {
        let err = AppError::GeoError("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Geo error: HTTP 503");
    }

    #[test]
    fn test_display_covers_every_variant() {
        let cases = [
            (AppError::Internal("x".into()), "Internal error: x"),
            (AppError::ValidationError("x".into()), "Validation error: x"),
            (AppError::ParseError("x".into()), "Parse error: x"),
            (AppError::GeoError("x".into()), "Geo error: x"),
            (AppError::ConfigError("x".into()), "Config error: x"),
            (AppError::IoError("x".into()), "IO error: x"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "planilha.xlsx");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::IoError(msg) if msg.contains("planilha.xlsx")));
    }
}
